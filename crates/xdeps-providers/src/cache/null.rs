//! Null cache provider
//!
//! A cache provider implementation that doesn't store anything. Selecting
//! it disables reference-count caching; every `total_refs` call reaches the
//! index.

use async_trait::async_trait;
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::{CacheEntryConfig, CacheProvider, CacheStats};

/// Null cache provider that doesn't store anything
///
/// # Example
///
/// ```rust
/// use xdeps_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
