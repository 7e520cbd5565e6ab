//! Instrumentation decorator tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use xdeps_application::RequestContext;
use xdeps_application::ports::DefsServiceInterface;
use xdeps_domain::{
    AccessDenial, DependencyReference, DependencyReferences, Error, RepositoryId, Result,
    SymbolLocation, SymbolPosition,
};
use xdeps_infrastructure::InstrumentedDefsService;
use xdeps_infrastructure::instrumentation::status_label;

/// Answers every call from fixed values and counts them
#[derive(Default)]
struct ScriptedDefs {
    calls: AtomicUsize,
}

#[async_trait]
impl DefsServiceInterface for ScriptedDefs {
    async fn total_refs(&self, _ctx: &RequestContext, source: &str) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if source == "missing" {
            return Err(Error::index_query("DependencyIndex.TotalRefs", "down"));
        }
        Ok(42)
    }

    async fn dependencies(
        &self,
        _ctx: &RequestContext,
        repo_id: RepositoryId,
        _exclude_private: bool,
    ) -> Result<Vec<DependencyReference>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![DependencyReference {
            repo_id,
            ..DependencyReference::default()
        }])
    }

    async fn dependency_references(
        &self,
        _ctx: &RequestContext,
        _op: &SymbolPosition,
    ) -> Result<DependencyReferences> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DependencyReferences::unreferenceable(SymbolLocation::default()))
    }

    async fn refresh_index(
        &self,
        _ctx: &RequestContext,
        repo_uri: &str,
        _commit_id: &str,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::unauthorized(repo_uri, AccessDenial::NotFound))
    }
}

fn position() -> SymbolPosition {
    SymbolPosition {
        language: "go".to_string(),
        repository_id: RepositoryId(7),
        commit_id: "abc".to_string(),
        file: "mux.go".to_string(),
        line: 3,
        character: 9,
        limit: 0,
    }
}

#[tokio::test]
async fn test_results_pass_through() {
    let service = InstrumentedDefsService::new(ScriptedDefs::default());
    let ctx = RequestContext::new();

    assert_eq!(service.total_refs(&ctx, "pkg:lodash").await.unwrap(), 42);
    assert!(matches!(
        service.total_refs(&ctx, "missing").await,
        Err(Error::IndexQueryFailed { .. })
    ));

    let deps = service.dependencies(&ctx, RepositoryId(3), true).await.unwrap();
    assert_eq!(deps[0].repo_id, RepositoryId(3));

    let refs = service.dependency_references(&ctx, &position()).await.unwrap();
    assert!(refs.references.is_empty());

    assert!(matches!(
        service.refresh_index(&ctx, "github.com/nope", "abc").await,
        Err(Error::Unauthorized {
            reason: AccessDenial::NotFound,
            ..
        })
    ));

    assert_eq!(service.inner().calls.load(Ordering::SeqCst), 5);
}

#[test]
fn test_status_labels() {
    assert_eq!(status_label(&Ok::<_, Error>(())), "ok");
    assert_eq!(
        status_label::<()>(&Err(Error::unauthorized("7", AccessDenial::Forbidden))),
        "unauthorized"
    );
    assert_eq!(
        status_label::<()>(&Err(Error::resolution("zero locations"))),
        "resolution_failed"
    );
    assert_eq!(
        status_label::<()>(&Err(Error::descriptor_unavailable("go", "{}"))),
        "descriptor_unavailable"
    );
    assert_eq!(
        status_label::<()>(&Err(Error::cancelled("LSP textDocument/xdefinition"))),
        "cancelled"
    );
    assert_eq!(
        status_label::<()>(&Err(Error::deadline_exceeded("DependencyIndex.TotalRefs"))),
        "deadline_exceeded"
    );
    assert_eq!(status_label::<()>(&Err(Error::internal("boom"))), "error");
}
