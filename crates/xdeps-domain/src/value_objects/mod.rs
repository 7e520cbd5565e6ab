//! Value objects
//!
//! Immutable request and response types that flow through the resolution
//! pipeline.

/// Reverse-dependency edges and combined results
pub mod dependency;
/// Repository language inventory
pub mod inventory;
/// Repository records, authorization witnesses and document identifiers
pub mod repository;
/// Symbol positions, locations and descriptors
pub mod symbol;

pub use dependency::{
    DependencyReference, DependencyReferences, PackageInformation, WorkspaceDependency,
};
pub use inventory::{Inventory, LanguageStat};
pub use repository::{AuthorizedRepository, DocumentUri, RepositoryId, RepositoryRef, WorkspaceRoot};
pub use symbol::{
    Location, PackageDescriptor, Position, Range, SymbolDescriptor, SymbolLocation, SymbolPosition,
};
