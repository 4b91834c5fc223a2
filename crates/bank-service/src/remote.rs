//! Contracts for lookups into sibling services.

use crate::dto::{BankDetailsDto, ProfileDto};
use async_trait::async_trait;
use bank_core::BankResult;

/// Reads profiles from `profile-app`.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProfileClient: Send + Sync {
    /// Fetches the profile `id`. Any transport failure or non-success status
    /// is `RemoteUnavailable`.
    async fn read_by_id(&self, id: i64) -> BankResult<ProfileDto>;
}

/// Reads bank details from `public-info-app`.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait BankDetailsClient: Send + Sync {
    /// Fetches the bank details `id`.
    async fn read_by_id(&self, id: i64) -> BankResult<BankDetailsDto>;
}
