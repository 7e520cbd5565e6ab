//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values.

use crate::config::{AppConfig, CacheProviderKind};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use xdeps_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `XDEPS__CACHE__PROVIDER`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.config_file() {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
            }
        }

        // Double underscore separates nested keys, single underscores stay in field names
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// The file `load` reads: the explicit path, otherwise the first
    /// default location that exists
    ///
    /// An explicit path is returned even when it does not exist; `load`
    /// then falls back to defaults and environment.
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_cache_config(config)?;
    validate_language_config(config)?;
    validate_repositories(config)?;
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;
    if cache.total_refs_ttl_secs == 0 {
        return Err(Error::configuration(
            "cache.total_refs_ttl_secs cannot be 0",
        ));
    }
    if cache.provider == CacheProviderKind::Moka && cache.max_capacity == 0 {
        return Err(Error::configuration(
            "cache.max_capacity cannot be 0 for the moka provider",
        ));
    }
    if cache.provider == CacheProviderKind::Redis
        && cache.redis_url.as_deref().is_none_or(str::is_empty)
    {
        return Err(Error::configuration(
            "cache.redis_url is required when cache.provider is redis",
        ));
    }
    Ok(())
}

fn validate_language_config(config: &AppConfig) -> Result<()> {
    let language = &config.language;
    if let Some(url) = &language.gateway_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::configuration(format!(
                "language.gateway_url must be an http(s) URL, got {url}"
            )));
        }
        if language.timeout_secs == 0 {
            return Err(Error::configuration(
                "language.timeout_secs cannot be 0 when a gateway is configured",
            ));
        }
    }
    Ok(())
}

fn validate_repositories(config: &AppConfig) -> Result<()> {
    let mut ids = HashSet::new();
    let mut uris = HashSet::new();
    for repo in &config.repositories {
        if repo.uri.is_empty() {
            return Err(Error::configuration(format!(
                "repository {} has an empty uri",
                repo.id
            )));
        }
        if !ids.insert(repo.id) {
            return Err(Error::configuration(format!(
                "duplicate repository id {}",
                repo.id
            )));
        }
        if !uris.insert(repo.uri.as_str()) {
            return Err(Error::configuration(format!(
                "duplicate repository uri {}",
                repo.uri
            )));
        }
    }
    Ok(())
}
