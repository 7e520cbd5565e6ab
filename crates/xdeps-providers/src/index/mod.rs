//! Reverse-Dependency Index Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`InMemoryDependencyIndex`] | Concurrent in-memory index with optional JSON snapshot file |

pub mod in_memory;

pub use in_memory::{IndexedEdge, InMemoryDependencyIndex, ProvidedPackage, RepositorySnapshot};
