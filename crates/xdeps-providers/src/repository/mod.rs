//! Repository Metadata Implementations

pub mod in_memory;

pub use in_memory::{InMemoryRepositoryStore, RepositoryEntry};
