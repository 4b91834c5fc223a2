//! # Bank Core
//!
//! Core types, traits, and error definitions shared by the public-info and
//! account services. This crate holds the domain entities persisted by the
//! repositories and the error taxonomy every layer propagates.

pub mod domain;
pub mod error;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
