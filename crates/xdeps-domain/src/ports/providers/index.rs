//! Dependency Index Port
//!
//! Abstraction over the reverse-dependency index. Reads may run
//! concurrently with each other and with refreshes; read-your-writes across
//! calls is not guaranteed.

use crate::error::Result;
use crate::ports::providers::InventoryProvider;
use crate::value_objects::{
    AuthorizedRepository, DependencyReference, PackageDescriptor, RepositoryId,
};
use async_trait::async_trait;

/// Reverse-dependency index port
#[async_trait]
pub trait DependencyIndexProvider: Send + Sync {
    /// Edges from other repositories onto packages provided by `repo_id`
    ///
    /// With `exclude_private`, edges whose dependent repository is private
    /// are dropped.
    async fn reverse_dependencies_by_repo(
        &self,
        repo_id: RepositoryId,
        exclude_private: bool,
    ) -> Result<Vec<DependencyReference>>;

    /// Public edges in `language` whose `dep_data` contains `descriptor`
    ///
    /// `limit == 0` applies [`crate::constants::MAX_REVERSE_DEPENDENCIES`].
    async fn reverse_dependencies_by_package(
        &self,
        language: &str,
        descriptor: &PackageDescriptor,
        limit: usize,
    ) -> Result<Vec<DependencyReference>>;

    /// Recompute and replace all index entries of one repository
    ///
    /// The repository must already have passed the access gate, since
    /// refreshing crawls it through the language backend. Must be idempotent
    /// for identical inputs.
    async fn refresh_index(
        &self,
        repo: &AuthorizedRepository,
        commit_id: &str,
        inventory: &dyn InventoryProvider,
    ) -> Result<()>;

    /// Authoritative total reference count for `source`
    async fn total_refs(&self, source: &str) -> Result<u64>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
