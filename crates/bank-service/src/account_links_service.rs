//! Lookups of the records an account references in sibling services.

use crate::dto::{BankDetailsDto, ProfileDto};
use async_trait::async_trait;
use bank_core::BankResult;

/// Resolves an account's profile and bank details.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait AccountLinksService: Send + Sync {
    /// Profile of the holder of account `account_id`.
    async fn profile_of(&self, account_id: i64) -> BankResult<ProfileDto>;

    /// Bank details of the bank holding account `account_id`.
    async fn bank_details_of(&self, account_id: i64) -> BankResult<BankDetailsDto>;
}
