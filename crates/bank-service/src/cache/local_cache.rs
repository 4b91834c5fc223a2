//! In-process cache backed by `moka`.

use super::CacheInterface;
use async_trait::async_trait;
use bank_config::CacheRegionConfig;
use bank_core::BankResult;
use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedValue {
    json: Arc<str>,
    ttl: Duration,
}

/// Expires each entry `ttl` after its last write.
struct WriteTtl;

impl Expiry<String, CachedValue> for WriteTtl {
    fn expire_after_create(&self, _key: &String, value: &CachedValue, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bounded, expiring key/value cache living in process memory.
///
/// Capacity is a byte budget: each entry weighs its key plus its JSON.
/// A disabled cache stores nothing and always misses.
pub struct LocalCacheService {
    name: String,
    cache: Option<Cache<String, CachedValue>>,
}

impl LocalCacheService {
    /// Creates a cache holding at most `max_bytes` of serialized entries.
    #[must_use]
    pub fn new(name: impl Into<String>, max_bytes: u64) -> Self {
        let name = name.into();
        let cache = Cache::builder()
            .name(&name)
            .max_capacity(max_bytes)
            .weigher(|key: &String, value: &CachedValue| -> u32 {
                u32::try_from(key.len() + value.json.len()).unwrap_or(u32::MAX)
            })
            .expire_after(WriteTtl)
            .build();

        Self {
            name,
            cache: Some(cache),
        }
    }

    /// Creates a cache from its configuration region.
    #[must_use]
    pub fn from_config(name: impl Into<String>, config: &CacheRegionConfig) -> Self {
        if config.enabled {
            Self::new(name, config.max_bytes)
        } else {
            Self::disabled(name)
        }
    }

    /// Create a no-op cache.
    #[must_use]
    pub fn disabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache: None,
        }
    }

    /// Cache name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current weighted size in bytes after pending maintenance has run.
    pub async fn weighted_size(&self) -> u64 {
        match &self.cache {
            Some(cache) => {
                cache.run_pending_tasks().await;
                cache.weighted_size()
            }
            None => 0,
        }
    }
}

#[async_trait]
impl CacheInterface for LocalCacheService {
    fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    async fn get_raw(&self, key: &str) -> BankResult<Option<String>> {
        let Some(cache) = &self.cache else {
            return Ok(None);
        };

        let value = cache.get(key).await;
        match &value {
            Some(_) => debug!("Cache '{}' hit for key '{}'", self.name, key),
            None => debug!("Cache '{}' miss for key '{}'", self.name, key),
        }

        Ok(value.map(|v| v.json.to_string()))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> BankResult<()> {
        let Some(cache) = &self.cache else {
            return Ok(());
        };

        cache
            .insert(
                key.to_string(),
                CachedValue {
                    json: Arc::from(value),
                    ttl,
                },
            )
            .await;

        debug!("Cached key '{}' in '{}' with TTL {:?}", key, self.name, ttl);
        Ok(())
    }
}
