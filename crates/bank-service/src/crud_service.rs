//! Generic CRUD service contract.

use bank_core::BankResult;
use async_trait::async_trait;

/// Create/read/update operations over one entity type, spoken in DTOs.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CrudService<D: Send + Sync + 'static>: Send + Sync {
    /// Returns the DTO for `id`, or `NotFound` naming the id.
    async fn find_by_id(&self, id: i64) -> BankResult<D>;

    /// Returns DTOs for every id. Fails with `NotFound` naming the absent ids
    /// when any is missing. Duplicates are collapsed; order is store-determined.
    async fn find_all_by_id(&self, ids: Vec<i64>) -> BankResult<Vec<D>>;

    /// Stores a new entity and returns it with its generated id.
    async fn create(&self, dto: D) -> BankResult<D>;

    /// Merges the present fields of `dto` into the entity `id` and stores it.
    async fn update(&self, id: i64, dto: D) -> BankResult<D>;
}
