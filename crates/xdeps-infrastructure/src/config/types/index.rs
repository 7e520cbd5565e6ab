//! Dependency index configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use xdeps_providers::constants::INDEX_DEFAULT_LANGUAGES;

/// Reverse-dependency index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// JSON file the index is loaded from and written back to after refreshes
    pub snapshot_path: Option<PathBuf>,
    /// Languages crawled on refresh
    pub languages: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            languages: INDEX_DEFAULT_LANGUAGES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
