// Allow collapsible_if for nested conditional logic
#![allow(clippy::collapsible_if)]

//! # xdeps - Provider Implementations
//!
//! Concrete implementations of the collaborator ports defined in
//! `xdeps-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Index | `DependencyIndexProvider` | InMemory |
//! | Language | `DefinitionResolver`, `DependencyCrawler` | LSP gateway, Null |
//! | Language | `SymbolSemantics` | LanguageSemantics |
//! | Repositories | `RepositoryAccessProvider`, `InventoryProvider` | InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! xdeps-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

pub use xdeps_domain::error::{Error, Result};
pub use xdeps_domain::ports::providers::{
    CacheProvider, DefinitionResolver, DependencyCrawler, DependencyIndexProvider,
    InventoryProvider, RepositoryAccessProvider, SymbolSemantics,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration
pub mod http;

/// Cache provider implementations
pub mod cache;

/// Reverse-dependency index implementations
pub mod index;

/// Language backend implementations
pub mod language;

/// Repository metadata implementations
pub mod repository;
