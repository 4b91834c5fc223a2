//! # Bank Client
//!
//! Typed HTTP clients for the sibling services the account service calls:
//! profiles from `profile-app` and bank details from `public-info-app`.
//! Base URLs come from a [`ServiceDiscovery`] resolved on every call, and
//! each client is wrapped by a caching decorator.

mod bank_details_client;
mod cached;
mod discovery;
mod http;
mod profile_client;

pub use bank_details_client::HttpBankDetailsClient;
pub use cached::{CachedBankDetailsClient, CachedProfileClient};
pub use discovery::{ServiceDiscovery, StaticServiceDiscovery};
pub use http::build_http_client;
pub use profile_client::HttpProfileClient;
