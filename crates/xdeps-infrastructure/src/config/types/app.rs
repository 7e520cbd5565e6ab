//! Main application configuration

use super::{CacheConfig, IndexConfig, LanguageConfig, LoggingConfig, RequestConfig};
use serde::{Deserialize, Serialize};
use xdeps_providers::repository::RepositoryEntry;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging
    pub logging: LoggingConfig,
    /// Reference-count cache
    pub cache: CacheConfig,
    /// Language-analysis gateway
    pub language: LanguageConfig,
    /// Per-request limits
    pub request: RequestConfig,
    /// Reverse-dependency index
    pub index: IndexConfig,
    /// Repositories known to the access gate and the inventory
    pub repositories: Vec<RepositoryEntry>,
}
