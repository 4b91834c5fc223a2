//! # Bank Repository
//!
//! SQLx-backed persistence for the bank services.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn CrudRepository<E>>
//! MySql*Repository
//!   ↓  DatabasePool
//! MySQL
//! ```
//!
//! Every write runs in its own transaction that covers the statement and
//! the read-back of the stored row.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
