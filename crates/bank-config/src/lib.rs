//! # Bank Config
//!
//! Configuration for the public-info and account services.
//! Values are layered from TOML files and `BANK_`-prefixed environment
//! variables, then validated before the server starts.

mod app_config;
mod loader;
mod service_kind;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use service_kind::*;
pub use validation::*;
