//! Null language backend
//!
//! Resolves no definitions and reports no workspace dependencies or
//! packages. Useful when no language gateway is configured: queries fail
//! with "zero locations" and refreshes produce empty index entries.

use async_trait::async_trait;
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::{DefinitionResolver, DependencyCrawler};
use xdeps_domain::value_objects::{
    DocumentUri, PackageInformation, Position, SymbolLocation, WorkspaceDependency, WorkspaceRoot,
};

/// Language backend that knows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLanguageBackend;

impl NullLanguageBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DefinitionResolver for NullLanguageBackend {
    async fn resolve_cross_repo_definition(
        &self,
        _language: &str,
        _document: &DocumentUri,
        _position: Position,
    ) -> Result<Vec<SymbolLocation>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl DependencyCrawler for NullLanguageBackend {
    async fn workspace_dependencies(
        &self,
        _language: &str,
        _root: &WorkspaceRoot,
    ) -> Result<Vec<WorkspaceDependency>> {
        Ok(Vec::new())
    }

    async fn workspace_packages(
        &self,
        _language: &str,
        _root: &WorkspaceRoot,
    ) -> Result<Vec<PackageInformation>> {
        Ok(Vec::new())
    }
}
