//! External Provider Ports
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | RepositoryAccessProvider | Authorization and repository lookup |
//! | InventoryProvider | Languages present in a repository |
//! | DefinitionResolver | Cross-repository definition lookup |
//! | SymbolSemantics | Referenceability and package identity rules |
//! | DependencyCrawler | Workspace dependency/package listing for refresh |
//! | DependencyIndexProvider | Reverse-dependency index store |
//! | CacheProvider | Shared key/value cache with TTL |

/// Cache provider port
pub mod cache;
/// Dependency index port
pub mod index;
/// Language backend ports
pub mod language;
/// Repository metadata ports
pub mod repository;

pub use cache::{CacheEntryConfig, CacheProvider, CacheStats};
pub use index::DependencyIndexProvider;
pub use language::{DefinitionResolver, DependencyCrawler, SymbolSemantics};
pub use repository::{InventoryProvider, RepositoryAccessProvider};
