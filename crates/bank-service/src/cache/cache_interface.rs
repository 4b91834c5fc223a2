//! Read-through cache contract used by the remote-client decorators.

use async_trait::async_trait;
use bank_core::BankResult;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Byte-oriented store the decorators cache DTO JSON in.
///
/// Values travel as JSON strings so the trait stays object safe; typed
/// access lives in [`CacheExt`]. Entries only ever leave by expiry or
/// capacity eviction.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// JSON stored under `key`, unless absent or expired.
    async fn get_raw(&self, key: &str) -> BankResult<Option<String>>;

    /// Stores `value` for `ttl` from now. Reads never extend that lifetime;
    /// writing the key again restarts it.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> BankResult<()>;

    /// A disabled cache stores nothing and misses every read.
    fn is_enabled(&self) -> bool;
}

/// Typed read-through on top of [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Returns the cached value for `key`, or runs `load` and caches what it
    /// returns. A failed load leaves the key absent.
    async fn get_or_set<T, F, Fut>(&self, key: &str, ttl: Duration, load: F) -> BankResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = BankResult<T>> + Send,
    {
        if let Some(json) = self.get_raw(key).await? {
            return Ok(serde_json::from_str(&json)?);
        }

        let value = load().await?;

        let json = serde_json::to_string(&value)?;
        if let Err(e) = self.set_raw(key, &json, ttl).await {
            warn!("Could not cache key '{}': {}", key, e);
        }

        Ok(value)
    }
}

impl<C: CacheInterface + ?Sized> CacheExt for C {}
