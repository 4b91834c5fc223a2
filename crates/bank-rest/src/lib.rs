//! # Bank REST
//!
//! REST API layer using Axum for the public-info and account services.
//! Every entity is exposed through the same create/read/update surface,
//! plus health endpoints and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
