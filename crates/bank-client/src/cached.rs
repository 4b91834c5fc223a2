//! Caching decorators over the remote clients.
//!
//! A hit never touches the network. A miss calls the wrapped client and
//! caches only a successful answer.

use async_trait::async_trait;
use bank_core::BankResult;
use bank_service::cache_keys;
use bank_service::{
    BankDetailsClient, BankDetailsDto, CacheExt, CacheRegion, ProfileClient, ProfileDto,
};
use std::sync::Arc;

/// [`ProfileClient`] backed by the profile cache region.
pub struct CachedProfileClient {
    inner: Arc<dyn ProfileClient>,
    region: CacheRegion,
}

impl CachedProfileClient {
    pub fn new(inner: Arc<dyn ProfileClient>, region: CacheRegion) -> Self {
        Self { inner, region }
    }
}

#[async_trait]
impl ProfileClient for CachedProfileClient {
    async fn read_by_id(&self, id: i64) -> BankResult<ProfileDto> {
        self.region
            .cache
            .get_or_set(&cache_keys::profile_by_id(id), self.region.ttl, || {
                self.inner.read_by_id(id)
            })
            .await
    }
}

/// [`BankDetailsClient`] backed by the bank details cache region.
pub struct CachedBankDetailsClient {
    inner: Arc<dyn BankDetailsClient>,
    region: CacheRegion,
}

impl CachedBankDetailsClient {
    pub fn new(inner: Arc<dyn BankDetailsClient>, region: CacheRegion) -> Self {
        Self { inner, region }
    }
}

#[async_trait]
impl BankDetailsClient for CachedBankDetailsClient {
    async fn read_by_id(&self, id: i64) -> BankResult<BankDetailsDto> {
        self.region
            .cache
            .get_or_set(&cache_keys::bank_details_by_id(id), self.region.ttl, || {
                self.inner.read_by_id(id)
            })
            .await
    }
}
