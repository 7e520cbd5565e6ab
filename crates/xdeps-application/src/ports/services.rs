//! Application Service Port Interfaces

use crate::context::RequestContext;
use async_trait::async_trait;
use xdeps_domain::error::Result;
use xdeps_domain::value_objects::{
    DependencyReference, DependencyReferences, RepositoryId, SymbolPosition,
};

// ============================================================================
// Defs Service Interface
// ============================================================================

/// Dependency-reference service
///
/// The four public operations. Every call is request-scoped; the only state
/// shared between calls is the reference-count cache and the index.
#[async_trait]
pub trait DefsServiceInterface: Send + Sync {
    /// Total reference count for `source`, served from cache within its TTL
    async fn total_refs(&self, ctx: &RequestContext, source: &str) -> Result<u64>;

    /// Repositories depending on `repo_id`
    async fn dependencies(
        &self,
        ctx: &RequestContext,
        repo_id: RepositoryId,
        exclude_private: bool,
    ) -> Result<Vec<DependencyReference>>;

    /// Repositories depending on the symbol at `op`
    async fn dependency_references(
        &self,
        ctx: &RequestContext,
        op: &SymbolPosition,
    ) -> Result<DependencyReferences>;

    /// Recompute the index entries of one repository at one commit
    async fn refresh_index(&self, ctx: &RequestContext, repo_uri: &str, commit_id: &str)
    -> Result<()>;
}
