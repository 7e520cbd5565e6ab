//! Composition root
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let count = context
//!     .defs_service()
//!     .total_refs(&context.request_context(), "github.com/gorilla/mux")
//!     .await?;
//! ```

use crate::config::AppConfig;
use crate::di::factory::{create_cache_provider, create_dependency_index, create_language_backend};
use crate::instrumentation::InstrumentedDefsService;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use xdeps_application::ports::DefsServiceInterface;
use xdeps_application::{DefsServiceImpl, ReferenceCountCache, RequestContext};
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::CacheProvider;
use xdeps_providers::index::InMemoryDependencyIndex;
use xdeps_providers::language::LanguageSemantics;
use xdeps_providers::repository::InMemoryRepositoryStore;

/// Application context: configuration plus the wired service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    repositories: Arc<InMemoryRepositoryStore>,
    index: Arc<InMemoryDependencyIndex>,
    cache: Arc<dyn CacheProvider>,
    defs: Arc<dyn DefsServiceInterface>,
}

impl AppContext {
    /// The instrumented defs service
    pub fn defs_service(&self) -> Arc<dyn DefsServiceInterface> {
        Arc::clone(&self.defs)
    }

    /// Fresh request context carrying the configured deadline
    pub fn request_context(&self) -> RequestContext {
        match self.config.request.timeout() {
            Some(timeout) => RequestContext::new().with_timeout(timeout),
            None => RequestContext::new(),
        }
    }

    /// Repository store behind the access gate
    pub fn repositories(&self) -> &Arc<InMemoryRepositoryStore> {
        &self.repositories
    }

    /// Reverse-dependency index
    pub fn index(&self) -> &Arc<InMemoryDependencyIndex> {
        &self.index
    }

    /// Cache backing the reference counts
    pub fn cache(&self) -> &Arc<dyn CacheProvider> {
        &self.cache
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("repositories", &self.repositories.len())
            .field("indexed", &self.index.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Build every provider from `config` and wire the defs service
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let repositories = Arc::new(InMemoryRepositoryStore::with_entries(
        config.repositories.iter().cloned(),
    ));
    let language = create_language_backend(&config.language)?;
    let index = create_dependency_index(&config.index, Arc::clone(&language.crawler)).await?;
    let cache = create_cache_provider(&config.cache)?;

    let counts = ReferenceCountCache::new(
        Arc::clone(&cache),
        Duration::from_secs(config.cache.total_refs_ttl_secs),
    );
    let service = DefsServiceImpl::with_reference_counts(
        repositories.clone(),
        language.resolver,
        Arc::new(LanguageSemantics::new()),
        index.clone(),
        repositories.clone(),
        counts,
    );

    info!(
        repositories = repositories.len(),
        indexed = index.len(),
        cache = config.cache.provider.as_str(),
        "xdeps initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        repositories,
        index,
        cache,
        defs: Arc::new(InstrumentedDefsService::new(service)),
    })
}
