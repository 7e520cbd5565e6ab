//! Repository Metadata Ports
//!
//! Authorization decisions and inventories are computed elsewhere; these
//! traits only consume them.

use crate::error::Result;
use crate::value_objects::{Inventory, RepositoryId, RepositoryRef};
use async_trait::async_trait;

/// Repository access port
///
/// Implementations must fail with [`crate::Error::Unauthorized`] carrying
/// `AccessDenial::NotFound` for unknown repositories and
/// `AccessDenial::Forbidden` for repositories the caller may not read.
#[async_trait]
pub trait RepositoryAccessProvider: Send + Sync {
    /// Resolve and authorize a repository by id
    async fn authorize(&self, id: RepositoryId) -> Result<RepositoryRef>;

    /// Resolve and authorize a repository by URI
    async fn get_by_uri(&self, uri: &str) -> Result<RepositoryRef>;
}

/// Inventory port, consulted by index refresh
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// Languages present in `repo` at `commit_id`
    async fn get_inventory(&self, repo: &RepositoryRef, commit_id: &str) -> Result<Inventory>;
}
