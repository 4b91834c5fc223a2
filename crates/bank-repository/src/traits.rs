//! Repository trait definitions.

use async_trait::async_trait;
use bank_core::BankResult;

/// Create/read/update access to one table.
///
/// Rows are never deleted. Implementations assign identifiers on
/// [`save`](CrudRepository::save) and return the stored row, so callers
/// always see the generated id.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CrudRepository<E: Send + Sync + 'static>: Send + Sync {
    /// Finds a row by id.
    async fn find_by_id(&self, id: i64) -> BankResult<Option<E>>;

    /// Finds every row whose id is in `ids`. Order is store-determined and
    /// unknown ids are silently skipped.
    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<E>>;

    /// Inserts a new row and returns it with its generated id.
    async fn save(&self, entity: E) -> BankResult<E>;

    /// Overwrites an existing row and returns the stored state.
    async fn update(&self, entity: E) -> BankResult<E>;
}
