//! Request configuration types

use crate::constants::REQUEST_DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Deadline of one operation; 0 disables it
    pub timeout_secs: u64,
}

impl RequestConfig {
    /// Deadline as a duration, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: REQUEST_DEFAULT_TIMEOUT_SECS,
        }
    }
}
