//! Access gate
//!
//! 🚨 SECURITY: every cross-repository operation starts here. The language
//! backend has unchecked access to all repositories, so nothing may reach it
//! for a repository the caller cannot read. The gate hands out
//! [`AuthorizedRepository`] values, and document identifiers can only be
//! built from those.

use crate::context::RequestContext;
use std::sync::Arc;
use tracing::debug;
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::RepositoryAccessProvider;
use xdeps_domain::value_objects::{AuthorizedRepository, RepositoryId};

/// Authorization gate in front of all repository data
#[derive(Clone)]
pub struct AccessGate {
    access: Arc<dyn RepositoryAccessProvider>,
}

impl AccessGate {
    /// Create a gate over the repository-access collaborator
    pub fn new(access: Arc<dyn RepositoryAccessProvider>) -> Self {
        Self { access }
    }

    /// Authorize a repository by id
    pub async fn authorize(
        &self,
        ctx: &RequestContext,
        id: RepositoryId,
    ) -> Result<AuthorizedRepository> {
        let repo = ctx
            .run(
                "AccessGate.Authorize",
                AuthorizedRepository::authorize(self.access.as_ref(), id),
            )
            .await?;
        debug!(repo_id = %id, repo = repo.uri(), "repository authorized");
        Ok(repo)
    }

    /// Authorize a repository by URI
    pub async fn authorize_uri(
        &self,
        ctx: &RequestContext,
        uri: &str,
    ) -> Result<AuthorizedRepository> {
        ctx.run(
            "AccessGate.AuthorizeUri",
            AuthorizedRepository::authorize_uri(self.access.as_ref(), uri),
        )
        .await
    }
}
