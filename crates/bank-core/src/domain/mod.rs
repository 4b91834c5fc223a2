//! Domain model persisted by the bank services.

pub mod entities;

pub use entities::*;
