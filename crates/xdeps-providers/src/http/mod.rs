//! HTTP Client Configuration
//!
//! Shared `reqwest` client settings for HTTP-based providers.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Configuration for HTTP client settings
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod config;

pub use crate::utils::HttpResponseUtils;
pub use config::HttpClientConfig;
