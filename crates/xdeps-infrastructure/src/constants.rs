//! Infrastructure constants
//!
//! Deployment tunables and their defaults. Constants that shape the
//! resolution pipeline itself live in `xdeps_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "xdeps.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "xdeps";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "XDEPS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "XDEPS_LOG";

/// File name prefix of rolled log files when the path has none
pub const LOG_FILE_PREFIX: &str = "xdeps";

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Default per-request deadline in seconds
pub const REQUEST_DEFAULT_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Provider name of the in-memory Moka cache
pub const CACHE_PROVIDER_MOKA: &str = "moka";

/// Provider name of the Redis cache
pub const CACHE_PROVIDER_REDIS: &str = "redis";

/// Provider name of the no-op cache
pub const CACHE_PROVIDER_NULL: &str = "null";

// ============================================================================
// METRIC NAMES
// ============================================================================

/// Counter of defs service calls, labelled by operation and status
pub const METRIC_DEFS_REQUESTS: &str = "xdeps_defs_requests_total";

/// Histogram of defs service call durations, labelled by operation
pub const METRIC_DEFS_DURATION: &str = "xdeps_defs_duration_seconds";
