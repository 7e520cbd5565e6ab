//! Moka in-memory cache provider
//!
//! Concurrent in-memory cache using Moka. Unlike a cache-wide
//! `time_to_live`, every entry carries the TTL it was written with, so
//! callers with different freshness requirements can share one instance.
//!
//! ## Example
//!
//! ```ignore
//! use xdeps_providers::cache::MokaCacheProvider;
//!
//! let provider = MokaCacheProvider::with_capacity(10_000);
//! ```

use crate::constants::CACHE_DEFAULT_MAX_ENTRIES;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::{CacheEntryConfig, CacheProvider, CacheStats};

/// Cached JSON with the TTL it was stored under
#[derive(Clone)]
struct CachedValue {
    json: Arc<str>,
    ttl: Duration,
}

/// Expires each entry after its own TTL, measured from the last write
struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
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

/// Moka-based in-memory cache provider
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CachedValue>,
    max_entries: u64,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_MAX_ENTRIES)
    }

    /// Create a new Moka cache provider holding at most `max_entries`
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            max_entries,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the maximum number of entries
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Ok(Some(value.json.to_string()))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            Ok(None)
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let entry = CachedValue {
            json: Arc::from(value),
            ttl: config.effective_ttl(),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        Ok(stats)
    }

    async fn size(&self) -> Result<usize> {
        self.cache.run_pending_tasks().await;
        Ok(usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX))
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
