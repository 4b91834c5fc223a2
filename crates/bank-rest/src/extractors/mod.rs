//! Custom Axum extractors and input parsing.

mod ids;
mod validated;

pub use ids::*;
pub use validated::*;
