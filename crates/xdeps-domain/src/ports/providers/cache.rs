//! Cache Provider Port
//!
//! Port for the shared key/value store backing the reference-count cache.
//! Supports in-memory (Moka), distributed (Redis) and null backends.
//! Values are JSON strings; expired entries must be indistinguishable from
//! absent ones.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default TTL for cache entries without an explicit TTL (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Cache Entry Configuration
///
/// # Example
///
/// ```
/// use xdeps_domain::ports::providers::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl(Duration::from_secs(3600));
/// assert_eq!(config.effective_ttl(), Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Get the effective TTL, falling back to default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Operation Statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// Implementations must be safe for unsynchronized concurrent use; no
/// cross-key locking is expected.
///
/// # Implementations
///
/// - **Moka**: In-memory cache with per-entry TTL
/// - **Redis**: Distributed cache for multi-instance deployments
/// - **Null**: No-op provider, every read misses
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// Returns `None` if not found or expired.
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// Returns true if the key was deleted, false if it didn't exist.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists and hasn't expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
