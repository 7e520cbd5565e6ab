//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `xdeps-domain`.

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the in-memory cache
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 100_000;

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://127.0.0.1:6379";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content-Type header value for JSON
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (language gateway calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;

/// HTTP TCP keep-alive interval in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;

// ============================================================================
// LANGUAGE GATEWAY CONSTANTS
// ============================================================================

/// Default language gateway endpoint
pub const LSP_GATEWAY_DEFAULT_URL: &str = "http://127.0.0.1:4388/xlang";

/// JSON-RPC protocol version
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id of the payload call inside a one-shot batch
pub const JSONRPC_PAYLOAD_ID: u64 = 1;

// ============================================================================
// INDEX CONSTANTS
// ============================================================================

/// Languages the index crawls by default
pub const INDEX_DEFAULT_LANGUAGES: &[&str] = &["go", "typescript", "javascript", "python", "java"];
