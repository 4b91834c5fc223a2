//! Caching infrastructure for the service layer.
//!
//! Two independent regions sit in front of the remote lookups: profiles
//! (short TTL) and bank details (long TTL). Entries appear only after a
//! successful remote read and are never invalidated by hand.

mod cache_interface;
pub mod cache_keys;
mod local_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use local_cache::LocalCacheService;

use bank_config::{CacheConfig, CacheRegionConfig};
use std::sync::Arc;
use std::time::Duration;

/// A cache together with the TTL its entries are written with.
#[derive(Clone)]
pub struct CacheRegion {
    pub cache: Arc<dyn CacheInterface>,
    pub ttl: Duration,
}

impl CacheRegion {
    /// Builds a moka-backed region from configuration.
    #[must_use]
    pub fn from_config(name: &str, config: &CacheRegionConfig) -> Self {
        Self {
            cache: Arc::new(LocalCacheService::from_config(name, config)),
            ttl: config.ttl(),
        }
    }
}

/// Owns the profile and bank details regions.
#[derive(Clone)]
pub struct CacheManager {
    profile: CacheRegion,
    bank_details: CacheRegion,
}

impl CacheManager {
    /// Name of the profile region.
    pub const PROFILE: &'static str = "profileCache";
    /// Name of the bank details region.
    pub const BANK_DETAILS: &'static str = "bankDetailsCache";

    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            profile: CacheRegion::from_config(Self::PROFILE, &config.profile),
            bank_details: CacheRegion::from_config(Self::BANK_DETAILS, &config.bank_details),
        }
    }

    #[must_use]
    pub fn profile(&self) -> CacheRegion {
        self.profile.clone()
    }

    #[must_use]
    pub fn bank_details(&self) -> CacheRegion {
        self.bank_details.clone()
    }
}
