//! Cache configuration types

use crate::constants::{CACHE_PROVIDER_MOKA, CACHE_PROVIDER_NULL, CACHE_PROVIDER_REDIS};
use serde::{Deserialize, Serialize};
use xdeps_domain::constants::TOTAL_REFS_CACHE_TTL_SECS;
use xdeps_providers::constants::CACHE_DEFAULT_MAX_ENTRIES;

/// Cache backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheProviderKind {
    /// In-memory cache (Moka)
    #[default]
    Moka,
    /// Distributed cache (Redis)
    Redis,
    /// No caching; every lookup misses
    Null,
}

impl CacheProviderKind {
    /// Provider name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moka => CACHE_PROVIDER_MOKA,
            Self::Redis => CACHE_PROVIDER_REDIS,
            Self::Null => CACHE_PROVIDER_NULL,
        }
    }
}

/// Reference-count cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache backend
    pub provider: CacheProviderKind,
    /// TTL of cached total reference counts
    pub total_refs_ttl_secs: u64,
    /// Maximum entries held by the in-memory backend
    pub max_capacity: u64,
    /// Redis URL (for the Redis provider)
    pub redis_url: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheProviderKind::default(),
            total_refs_ttl_secs: TOTAL_REFS_CACHE_TTL_SECS,
            max_capacity: CACHE_DEFAULT_MAX_ENTRIES,
            redis_url: None,
        }
    }
}
