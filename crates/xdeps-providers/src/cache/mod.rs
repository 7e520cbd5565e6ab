//! Cache Provider Implementations
//!
//! Backends for the shared reference-count cache.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | Every read misses |
//! | [`MokaCacheProvider`] | Local | In-memory cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `NullCacheProvider` to disable caching
//! - **Single Instance**: Use `MokaCacheProvider`
//! - **Multi Instance**: Use `RedisCacheProvider` so all instances share counts

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

pub use xdeps_domain::ports::providers::{CacheEntryConfig, CacheStats};
