//! Language gateway configuration types

use serde::{Deserialize, Serialize};
use xdeps_providers::constants::HTTP_REQUEST_TIMEOUT_SECS;

/// Language-analysis gateway configuration
///
/// Without a `gateway_url` the null backend is used and every definition
/// lookup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// JSON-RPC endpoint of the gateway
    pub gateway_url: Option<String>,
    /// Timeout of one gateway call
    pub timeout_secs: u64,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            gateway_url: None,
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
        }
    }
}
