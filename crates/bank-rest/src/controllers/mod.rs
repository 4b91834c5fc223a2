//! REST API controllers.

pub mod account_details_controller;
pub mod bank_details_controller;
pub mod certificate_controller;
pub mod crud;
pub mod health_controller;
pub mod license_controller;

pub use health_controller::*;
