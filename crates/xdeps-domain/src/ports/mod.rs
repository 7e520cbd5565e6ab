//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the resolution pipeline and its
//! collaborators. High-level code depends on these traits; providers and
//! test fakes implement them.
//!
//! ## Organization
//!
//! - **providers/** - access control, language backend, dependency index, cache

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{
    CacheEntryConfig, CacheProvider, CacheStats, DefinitionResolver, DependencyCrawler,
    DependencyIndexProvider, InventoryProvider, RepositoryAccessProvider, SymbolSemantics,
};
