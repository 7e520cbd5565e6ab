//! Provider factories
//!
//! One function per port family. Each reads its configuration section and
//! returns the matching implementation from `xdeps-providers`.

use crate::config::{CacheConfig, CacheProviderKind, IndexConfig, LanguageConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::{CacheProvider, DefinitionResolver, DependencyCrawler};
use xdeps_providers::cache::{MokaCacheProvider, NullCacheProvider, RedisCacheProvider};
use xdeps_providers::http::HttpClientConfig;
use xdeps_providers::index::InMemoryDependencyIndex;
use xdeps_providers::language::{LspGatewayClient, NullLanguageBackend};

/// Create the cache backing the reference-count cache
pub fn create_cache_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    let provider: Arc<dyn CacheProvider> = match config.provider {
        CacheProviderKind::Moka => Arc::new(MokaCacheProvider::with_capacity(config.max_capacity)),
        CacheProviderKind::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                Error::configuration("cache.redis_url is required when cache.provider is redis")
            })?;
            let redis = RedisCacheProvider::new(url)?;
            info!(address = redis.server_address(), "using redis cache");
            Arc::new(redis)
        }
        CacheProviderKind::Null => Arc::new(NullCacheProvider::new()),
    };
    info!(provider = config.provider.as_str(), "cache provider created");
    Ok(provider)
}

/// Language backend split along the ports the pipeline uses
#[derive(Clone)]
pub struct LanguageBackend {
    /// Definition lookup
    pub resolver: Arc<dyn DefinitionResolver>,
    /// Workspace crawling for index refresh
    pub crawler: Arc<dyn DependencyCrawler>,
}

/// Create the language backend
///
/// Without a gateway URL the null backend is returned; definition lookups
/// then fail and refreshes find nothing.
pub fn create_language_backend(config: &LanguageConfig) -> Result<LanguageBackend> {
    match &config.gateway_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.timeout_secs);
            let http_client = HttpClientConfig::with_timeout(timeout).build_client()?;
            let client = Arc::new(LspGatewayClient::new(url.clone(), timeout, http_client));
            info!(endpoint = client.endpoint(), "using language gateway");
            Ok(LanguageBackend {
                resolver: client.clone(),
                crawler: client,
            })
        }
        None => {
            warn!("no language gateway configured, definition lookups will fail");
            let backend = Arc::new(NullLanguageBackend::new());
            Ok(LanguageBackend {
                resolver: backend.clone(),
                crawler: backend,
            })
        }
    }
}

/// Create the reverse-dependency index
///
/// With a snapshot path the index is loaded from it and written back after
/// every refresh.
pub async fn create_dependency_index(
    config: &IndexConfig,
    crawler: Arc<dyn DependencyCrawler>,
) -> Result<Arc<InMemoryDependencyIndex>> {
    let index = match &config.snapshot_path {
        Some(path) => InMemoryDependencyIndex::open(path, crawler).await?,
        None => InMemoryDependencyIndex::new(crawler),
    };
    Ok(Arc::new(index.with_languages(config.languages.iter().cloned())))
}
