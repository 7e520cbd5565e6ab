//! Defs service instrumentation
//!
//! [`InstrumentedDefsService`] wraps any [`DefsServiceInterface`] with one
//! tracing span per operation and two metrics:
//!
//! | Metric | Kind | Labels |
//! |--------|------|--------|
//! | `xdeps_defs_requests_total` | counter | `operation`, `status` |
//! | `xdeps_defs_duration_seconds` | histogram | `operation` |
//!
//! The `metrics` facade is a no-op until a recorder is installed.

use crate::constants::{METRIC_DEFS_DURATION, METRIC_DEFS_REQUESTS};
use crate::utils::TimedOperation;
use async_trait::async_trait;
use std::future::Future;
use tracing::{Instrument, debug, info_span, warn};
use xdeps_application::RequestContext;
use xdeps_application::ports::DefsServiceInterface;
use xdeps_domain::error::{Error, Result};
use xdeps_domain::value_objects::{
    DependencyReference, DependencyReferences, RepositoryId, SymbolPosition,
};

/// Span and metric operation names
pub mod operations {
    pub const TOTAL_REFS: &str = "Defs.TotalRefs";
    pub const DEPENDENCIES: &str = "Defs.Dependencies";
    pub const DEPENDENCY_REFERENCES: &str = "Defs.DependencyReferences";
    pub const REFRESH_INDEX: &str = "Defs.RefreshIndex";
}

/// Status label recorded for a finished call
pub fn status_label<T>(result: &Result<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(Error::Unauthorized { .. }) => "unauthorized",
        Err(Error::ResolutionFailed { .. }) => "resolution_failed",
        Err(Error::DescriptorUnavailable { .. }) => "descriptor_unavailable",
        Err(Error::IndexQueryFailed { .. }) => "index_query_failed",
        Err(Error::CacheCorrupt { .. }) => "cache_corrupt",
        Err(Error::Cancelled { .. }) => "cancelled",
        Err(Error::DeadlineExceeded { .. }) => "deadline_exceeded",
        Err(_) => "error",
    }
}

async fn observe<T, F>(operation: &'static str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let timer = TimedOperation::start();
    let result = call.await;
    let status = status_label(&result);

    metrics::counter!(METRIC_DEFS_REQUESTS, "operation" => operation, "status" => status)
        .increment(1);
    metrics::histogram!(METRIC_DEFS_DURATION, "operation" => operation)
        .record(timer.elapsed_secs());

    match &result {
        Ok(_) => debug!(elapsed_ms = timer.elapsed_ms(), "{operation} completed"),
        Err(e) if e.is_cancellation() => {
            debug!(elapsed_ms = timer.elapsed_ms(), error = %e, "{operation} abandoned");
        }
        Err(e) => warn!(elapsed_ms = timer.elapsed_ms(), status, error = %e, "{operation} failed"),
    }
    result
}

/// Tracing and metrics decorator around a defs service
#[derive(Debug, Clone)]
pub struct InstrumentedDefsService<S> {
    inner: S,
}

impl<S> InstrumentedDefsService<S> {
    /// Wrap `inner`
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped service
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: DefsServiceInterface> DefsServiceInterface for InstrumentedDefsService<S> {
    async fn total_refs(&self, ctx: &RequestContext, source: &str) -> Result<u64> {
        let span = info_span!("Defs.TotalRefs", source);
        observe(operations::TOTAL_REFS, self.inner.total_refs(ctx, source))
            .instrument(span)
            .await
    }

    async fn dependencies(
        &self,
        ctx: &RequestContext,
        repo_id: RepositoryId,
        exclude_private: bool,
    ) -> Result<Vec<DependencyReference>> {
        let span = info_span!("Defs.Dependencies", repo_id = repo_id.0, exclude_private);
        observe(
            operations::DEPENDENCIES,
            self.inner.dependencies(ctx, repo_id, exclude_private),
        )
        .instrument(span)
        .await
    }

    async fn dependency_references(
        &self,
        ctx: &RequestContext,
        op: &SymbolPosition,
    ) -> Result<DependencyReferences> {
        let span = info_span!(
            "Defs.DependencyReferences",
            language = %op.language,
            repo_id = op.repository_id.0,
            commit = %op.commit_id,
            file = %op.file,
            line = op.line,
            character = op.character,
            limit = op.limit,
        );
        observe(
            operations::DEPENDENCY_REFERENCES,
            self.inner.dependency_references(ctx, op),
        )
        .instrument(span)
        .await
    }

    async fn refresh_index(
        &self,
        ctx: &RequestContext,
        repo_uri: &str,
        commit_id: &str,
    ) -> Result<()> {
        let span = info_span!("Defs.RefreshIndex", repo_uri, commit = commit_id);
        observe(
            operations::REFRESH_INDEX,
            self.inner.refresh_index(ctx, repo_uri, commit_id),
        )
        .instrument(span)
        .await
    }
}
