//! Defs Service Use Case
//!
//! Orchestrates the access gate, the language backend, the reverse
//! dependency index and the reference-count cache into the four public
//! operations.

use crate::context::RequestContext;
use crate::domain_services::{
    AccessGate, DefinitionLocator, ReferenceCountCache, SymbolClass, SymbolClassifier,
};
use crate::ports::services::DefsServiceInterface;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use xdeps_domain::error::Result;
use xdeps_domain::ports::providers::{
    CacheProvider, DefinitionResolver, DependencyIndexProvider, InventoryProvider,
    RepositoryAccessProvider, SymbolSemantics,
};
use xdeps_domain::value_objects::{
    DependencyReference, DependencyReferences, RepositoryId, SymbolPosition,
};

/// Index operation names used in error context and cancellation reports
mod index_ops {
    pub const TOTAL_REFS: &str = "DependencyIndex.TotalRefs";
    pub const BY_REPO: &str = "DependencyIndex.ReverseDependenciesByRepo";
    pub const BY_PACKAGE: &str = "DependencyIndex.ReverseDependenciesByPackage";
    pub const REFRESH: &str = "DependencyIndex.RefreshIndex";
}

/// Defs service implementation
pub struct DefsServiceImpl {
    gate: AccessGate,
    locator: DefinitionLocator,
    classifier: SymbolClassifier,
    index: Arc<dyn DependencyIndexProvider>,
    inventory: Arc<dyn InventoryProvider>,
    counts: ReferenceCountCache,
}

impl DefsServiceImpl {
    /// Create the service with the standard one-hour reference-count TTL
    pub fn new(
        access: Arc<dyn RepositoryAccessProvider>,
        resolver: Arc<dyn DefinitionResolver>,
        semantics: Arc<dyn SymbolSemantics>,
        index: Arc<dyn DependencyIndexProvider>,
        inventory: Arc<dyn InventoryProvider>,
        cache: Arc<dyn CacheProvider>,
    ) -> Self {
        Self::with_reference_counts(
            access,
            resolver,
            semantics,
            index,
            inventory,
            ReferenceCountCache::with_default_ttl(cache),
        )
    }

    /// Create the service around a preconfigured reference-count cache
    pub fn with_reference_counts(
        access: Arc<dyn RepositoryAccessProvider>,
        resolver: Arc<dyn DefinitionResolver>,
        semantics: Arc<dyn SymbolSemantics>,
        index: Arc<dyn DependencyIndexProvider>,
        inventory: Arc<dyn InventoryProvider>,
        counts: ReferenceCountCache,
    ) -> Self {
        Self {
            gate: AccessGate::new(access),
            locator: DefinitionLocator::new(resolver),
            classifier: SymbolClassifier::new(semantics),
            index,
            inventory,
            counts,
        }
    }

    /// The reference-count cache, for statistics
    pub fn reference_counts(&self) -> &ReferenceCountCache {
        &self.counts
    }
}

#[async_trait]
impl DefsServiceInterface for DefsServiceImpl {
    async fn total_refs(&self, ctx: &RequestContext, source: &str) -> Result<u64> {
        if let Some(count) = self.counts.get(ctx, source).await? {
            return Ok(count);
        }

        let count = ctx
            .run(index_ops::TOTAL_REFS, self.index.total_refs(source))
            .await
            .map_err(|e| e.into_index_failure(index_ops::TOTAL_REFS))?;

        match self.counts.set(ctx, source, count).await {
            Ok(()) => {}
            Err(e) if e.is_cancellation() => return Err(e),
            Err(e) => warn!(source, error = %e, "failed to cache total reference count"),
        }
        Ok(count)
    }

    async fn dependencies(
        &self,
        ctx: &RequestContext,
        repo_id: RepositoryId,
        exclude_private: bool,
    ) -> Result<Vec<DependencyReference>> {
        ctx.run(
            index_ops::BY_REPO,
            self.index
                .reverse_dependencies_by_repo(repo_id, exclude_private),
        )
        .await
        .map_err(|e| e.into_index_failure(index_ops::BY_REPO))
    }

    async fn dependency_references(
        &self,
        ctx: &RequestContext,
        op: &SymbolPosition,
    ) -> Result<DependencyReferences> {
        let repo = self.gate.authorize(ctx, op.repository_id).await?;
        let location = self.locator.locate(ctx, &repo, op).await?;

        let descriptor = match self.classifier.classify(&op.language, &location.symbol)? {
            SymbolClass::Unreferenceable => {
                debug!(
                    language = %op.language,
                    symbol = %location.symbol,
                    "symbol is not referenceable"
                );
                return Ok(DependencyReferences::unreferenceable(location));
            }
            SymbolClass::Package(descriptor) => descriptor,
        };

        let references = ctx
            .run(
                index_ops::BY_PACKAGE,
                self.index
                    .reverse_dependencies_by_package(&op.language, &descriptor, op.limit),
            )
            .await
            .map_err(|e| e.into_index_failure(index_ops::BY_PACKAGE))?;

        Ok(DependencyReferences {
            references,
            location,
        })
    }

    async fn refresh_index(
        &self,
        ctx: &RequestContext,
        repo_uri: &str,
        commit_id: &str,
    ) -> Result<()> {
        let repo = self.gate.authorize_uri(ctx, repo_uri).await?;
        ctx.run(
            index_ops::REFRESH,
            self.index
                .refresh_index(&repo, commit_id, self.inventory.as_ref()),
        )
        .await
        .map_err(|e| e.into_index_failure(index_ops::REFRESH))?;
        debug!(repo = repo_uri, commit = commit_id, "index refreshed");
        Ok(())
    }
}
