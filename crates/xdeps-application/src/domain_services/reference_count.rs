//! Reference-count cache
//!
//! Total reference counts for popular sources take around a second to
//! compute, so they are kept in the shared cache for a fixed TTL. Values are
//! stored as canonical JSON integers under `totalrefs:<source>`.
//!
//! Concurrent misses on the same source may both compute and both write;
//! the results are equal so the duplicate work is harmless.

use crate::context::RequestContext;
use metrics::counter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::trace;
use xdeps_domain::constants::{TOTAL_REFS_CACHE_NAMESPACE, TOTAL_REFS_CACHE_TTL_SECS};
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::{CacheEntryConfig, CacheProvider, CacheStats};

const HIT_MISS_METRIC: &str = "xdeps_totalrefs_cache_total";

/// TTL-bounded cache of total reference counts
#[derive(Debug)]
pub struct ReferenceCountCache {
    provider: Arc<dyn CacheProvider>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ReferenceCountCache {
    /// Create a cache with an explicit TTL
    pub fn new(provider: Arc<dyn CacheProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache with the standard one-hour TTL
    pub fn with_default_ttl(provider: Arc<dyn CacheProvider>) -> Self {
        Self::new(provider, Duration::from_secs(TOTAL_REFS_CACHE_TTL_SECS))
    }

    /// TTL applied to every write
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cache key for a source
    pub fn key(source: &str) -> String {
        format!("{TOTAL_REFS_CACHE_NAMESPACE}:{source}")
    }

    /// Cached count for `source`
    ///
    /// An entry that does not decode as an integer is `CacheCorrupt`; it is
    /// not treated as a miss.
    pub async fn get(&self, ctx: &RequestContext, source: &str) -> Result<Option<u64>> {
        let key = Self::key(source);
        let cached = ctx
            .run("ReferenceCountCache.Get", self.provider.get_json(&key))
            .await?;

        match cached {
            Some(json) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                counter!(HIT_MISS_METRIC, "type" => "hit").increment(1);
                trace!(key = %key, "total refs cache hit");
                serde_json::from_str::<u64>(&json)
                    .map(Some)
                    .map_err(|e| Error::cache_corrupt(key, e))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                counter!(HIT_MISS_METRIC, "type" => "miss").increment(1);
                trace!(key = %key, "total refs cache miss");
                Ok(None)
            }
        }
    }

    /// Store `count` for `source` with a fresh TTL
    pub async fn set(&self, ctx: &RequestContext, source: &str, count: u64) -> Result<()> {
        let key = Self::key(source);
        let json = serde_json::to_string(&count)?;
        let config = CacheEntryConfig::default().with_ttl(self.ttl);
        ctx.run(
            "ReferenceCountCache.Set",
            self.provider.set_json(&key, &json, config),
        )
        .await
    }

    /// Hit/miss counters since construction
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        };
        stats.hit_rate = stats.calculate_hit_rate();
        stats
    }
}
