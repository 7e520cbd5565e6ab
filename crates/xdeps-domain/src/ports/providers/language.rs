//! Language Backend Ports
//!
//! The language-analysis backend is split along the seams the pipeline uses:
//! definition lookup (network, slow), symbol semantics (pure rules), and
//! workspace crawling (only used while refreshing the index).

use crate::error::Result;
use crate::value_objects::{
    DocumentUri, PackageDescriptor, PackageInformation, Position, SymbolDescriptor, SymbolLocation,
    WorkspaceDependency, WorkspaceRoot,
};
use async_trait::async_trait;

/// Cross-repository definition lookup (`textDocument/xdefinition`)
#[async_trait]
pub trait DefinitionResolver: Send + Sync {
    /// Canonical locations of the symbol at `position` in `document`
    ///
    /// An empty vector means the backend found nothing; callers decide
    /// whether that is an error.
    async fn resolve_cross_repo_definition(
        &self,
        language: &str,
        document: &DocumentUri,
        position: Position,
    ) -> Result<Vec<SymbolLocation>>;
}

/// Per-language symbol rules
pub trait SymbolSemantics: Send + Sync {
    /// Whether the symbol is visible outside its defining compilation unit
    fn is_referenceable(&self, language: &str, symbol: &SymbolDescriptor) -> bool;

    /// Package identity of a referenceable symbol
    fn package_descriptor(
        &self,
        symbol: &SymbolDescriptor,
        language: &str,
    ) -> Option<PackageDescriptor>;
}

/// Workspace crawling used by index refresh
#[async_trait]
pub trait DependencyCrawler: Send + Sync {
    /// External dependencies declared by the workspace (`workspace/xdependencies`)
    async fn workspace_dependencies(
        &self,
        language: &str,
        root: &WorkspaceRoot,
    ) -> Result<Vec<WorkspaceDependency>>;

    /// Packages the workspace provides (`workspace/xpackages`)
    async fn workspace_packages(
        &self,
        language: &str,
        root: &WorkspaceRoot,
    ) -> Result<Vec<PackageInformation>>;
}
