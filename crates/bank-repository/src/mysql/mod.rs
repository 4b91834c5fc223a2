//! MySQL repository implementations.

mod account_details_repository;
mod bank_details_repository;
mod certificate_repository;
mod license_repository;

pub use account_details_repository::*;
pub use bank_details_repository::*;
pub use certificate_repository::*;
pub use license_repository::*;

use bank_core::{BankError, BankResult};
use sqlx::mysql::MySqlQueryResult;
use sqlx::{MySql, QueryBuilder};

/// Starts `{select} WHERE id IN (?, ?, ...)` with every id bound.
///
/// `ids` must not be empty: `IN ()` is not valid MySQL.
fn select_by_ids<'a>(select: &str, ids: &'a [i64]) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::<MySql>::new(select);
    builder.push(" WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
    builder
}

/// Reads the AUTO_INCREMENT id generated by an INSERT.
fn inserted_id(result: &MySqlQueryResult) -> BankResult<i64> {
    i64::try_from(result.last_insert_id())
        .map_err(|_| BankError::internal("Generated id does not fit in BIGINT"))
}

/// Returns the id of an entity about to be updated.
fn require_id(id: Option<i64>, table: &str) -> BankResult<i64> {
    id.ok_or_else(|| BankError::validation(format!("Cannot update {} without an id", table)))
}
