//! # Bank Server Library
//!
//! Wiring and startup of the bank services. One binary serves either the
//! public-info or the account API, chosen by `app.service`.

pub mod app;
pub mod di;
pub mod startup;
