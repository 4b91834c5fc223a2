//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `crud_service.rs`).

pub mod account_links_service_impl;
pub mod crud_service_impl;

pub use account_links_service_impl::AccountLinksServiceImpl;
pub use crud_service_impl::CrudServiceImpl;
