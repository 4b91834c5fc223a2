//! # Bank Service
//!
//! Service layer for the public-info and account services: DTOs, mappers,
//! the not-found supplier, the generic CRUD service, remote-lookup
//! contracts and the local caches in front of them.

pub mod account_links_service;
pub mod cache;
pub mod crud_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod not_found;
pub mod remote;

pub use account_links_service::*;
pub use cache::*;
pub use crud_service::*;
pub use dto::*;
pub use mappers::*;
pub use not_found::*;
pub use r#impl::{AccountLinksServiceImpl, CrudServiceImpl};
pub use remote::*;
