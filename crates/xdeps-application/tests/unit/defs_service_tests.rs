//! Tests for the four public operations

use crate::fakes::{
    FakeIndex, FakeResolver, FakeSemantics, Harness, MemoryCache, ResolverBehavior,
    go_package_symbol, object, symbol_location,
};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use xdeps_application::{DefsServiceInterface, RequestContext};
use xdeps_domain::{
    AccessDenial, DependencyReference, Error, PackageDescriptor, RepositoryId, SymbolPosition,
};

fn position(repository_id: i32) -> SymbolPosition {
    SymbolPosition {
        language: "go".to_string(),
        repository_id: RepositoryId(repository_id),
        commit_id: "abc".to_string(),
        file: "main.go".to_string(),
        line: 10,
        character: 4,
        limit: 0,
    }
}

fn mux_reference(repo_id: i32) -> DependencyReference {
    DependencyReference {
        repo_id: RepositoryId(repo_id),
        dep_data: object(json!({"package": "github.com/gorilla/mux"})),
        hints: object(json!({"version": "v1.8.0"})),
    }
}

fn referenceable_go() -> FakeSemantics {
    FakeSemantics::new(true, Some(json!({"package": "github.com/gorilla/mux"})))
}

// ============================================================================
// TotalRefs
// ============================================================================

#[tokio::test]
async fn test_total_refs_miss_computes_stores_and_serves_from_cache() {
    let index = FakeIndex {
        total: 42,
        ..FakeIndex::default()
    };
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), index);
    let service = h.service();
    let ctx = RequestContext::new();

    assert_eq!(service.total_refs(&ctx, "pkg:lodash").await.expect("first"), 42);
    assert_eq!(h.cache.raw("totalrefs:pkg:lodash").as_deref(), Some("42"));
    assert_eq!(
        *h.cache.last_ttl.lock().expect("lock"),
        Some(Duration::from_secs(3600))
    );

    assert_eq!(service.total_refs(&ctx, "pkg:lodash").await.expect("second"), 42);
    assert_eq!(h.index.total_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_total_refs_live_entry_skips_index() {
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), FakeIndex::default());
    h.cache
        .insert_raw("totalrefs:pkg:lodash", "7", Duration::from_secs(3600));

    let count = h
        .service()
        .total_refs(&RequestContext::new(), "pkg:lodash")
        .await
        .expect("cached");

    assert_eq!(count, 7);
    assert_eq!(h.index.calls(), 0);
    assert_eq!(h.cache.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_total_refs_recomputes_after_expiry() {
    let index = FakeIndex {
        total: 5,
        ..FakeIndex::default()
    };
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), index);
    let service = h.service_with_ttl(Duration::from_secs(3600));
    let ctx = RequestContext::new();

    service.total_refs(&ctx, "src").await.expect("first");
    tokio::time::advance(Duration::from_secs(3601)).await;
    service.total_refs(&ctx, "src").await.expect("second");

    assert_eq!(h.index.total_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_total_refs_corrupt_entry_is_not_recomputed() {
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), FakeIndex::default());
    h.cache
        .insert_raw("totalrefs:src", "{not json", Duration::from_secs(3600));

    let err = h
        .service()
        .total_refs(&RequestContext::new(), "src")
        .await
        .expect_err("corrupt");

    assert!(matches!(err, Error::CacheCorrupt { .. }));
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_total_refs_survives_cache_write_failure() {
    let index = FakeIndex {
        total: 11,
        ..FakeIndex::default()
    };
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), index).with_cache(
        MemoryCache {
            fail_writes: true,
            ..MemoryCache::default()
        },
    );

    let count = h
        .service()
        .total_refs(&RequestContext::new(), "src")
        .await
        .expect("computed value");

    assert_eq!(count, 11);
    assert_eq!(h.cache.writes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_total_refs_index_failure_is_wrapped() {
    let index = FakeIndex {
        fail: true,
        ..FakeIndex::default()
    };
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), index);

    let err = h
        .service()
        .total_refs(&RequestContext::new(), "src")
        .await
        .expect_err("index down");

    assert!(matches!(err, Error::IndexQueryFailed { .. }));
    assert_eq!(h.cache.writes.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Dependencies
// ============================================================================

#[tokio::test]
async fn test_dependencies_passes_through() {
    let index = FakeIndex {
        references: vec![mux_reference(3), mux_reference(4)],
        ..FakeIndex::default()
    };
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), index);

    let deps = h
        .service()
        .dependencies(&RequestContext::new(), RepositoryId(7), true)
        .await
        .expect("dependencies");

    assert_eq!(deps, vec![mux_reference(3), mux_reference(4)]);
    assert_eq!(
        *h.index.last_by_repo.lock().expect("lock"),
        Some((RepositoryId(7), true))
    );
}

// ============================================================================
// DependencyReferences
// ============================================================================

#[tokio::test]
async fn test_dependency_references_happy_path() {
    let index = FakeIndex {
        references: vec![mux_reference(3)],
        ..FakeIndex::default()
    };
    let h = Harness::new(
        FakeResolver::returning(vec![go_package_symbol()]),
        referenceable_go(),
        index,
    );
    let mut op = position(7);
    op.limit = 25;

    let result = h
        .service()
        .dependency_references(&RequestContext::new(), &op)
        .await
        .expect("references");

    assert_eq!(result.references, vec![mux_reference(3)]);
    assert_eq!(result.location, go_package_symbol());
    assert_eq!(
        h.resolver.documents.lock().expect("lock").as_slice(),
        ["git://github.com/gorilla/mux?abc#main.go"]
    );

    let query = h.index.last_query.lock().expect("lock").clone();
    let (language, descriptor, limit) = query.expect("index queried");
    assert_eq!(language, "go");
    assert_eq!(
        descriptor,
        PackageDescriptor(object(json!({"package": "github.com/gorilla/mux"})))
    );
    assert_eq!(limit, 25);
}

#[tokio::test]
async fn test_dependency_references_forbidden_repository() {
    let h = Harness::new(
        FakeResolver::returning(vec![go_package_symbol()]),
        referenceable_go(),
        FakeIndex::default(),
    );

    let err = h
        .service()
        .dependency_references(&RequestContext::new(), &position(99))
        .await
        .expect_err("forbidden");

    assert!(matches!(
        err,
        Error::Unauthorized {
            reason: AccessDenial::Forbidden,
            ..
        }
    ));
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_dependency_references_unknown_repository() {
    let h = Harness::new(
        FakeResolver::returning(vec![go_package_symbol()]),
        referenceable_go(),
        FakeIndex::default(),
    );

    let err = h
        .service()
        .dependency_references(&RequestContext::new(), &position(1234))
        .await
        .expect_err("not found");

    assert!(matches!(
        err,
        Error::Unauthorized {
            reason: AccessDenial::NotFound,
            ..
        }
    ));
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_dependency_references_unexported_local_is_empty() {
    let local = symbol_location(
        json!({"name": "x", "package": "github.com/gorilla/mux"}),
        "git://github.com/gorilla/mux?abc#main.go",
    );
    let h = Harness::new(
        FakeResolver::returning(vec![local.clone()]),
        FakeSemantics::new(false, Some(json!({"package": "github.com/gorilla/mux"}))),
        FakeIndex::default(),
    );

    let result = h
        .service()
        .dependency_references(&RequestContext::new(), &position(7))
        .await
        .expect("empty result");

    assert!(result.references.is_empty());
    assert_eq!(result.location, local);
    assert_eq!(h.semantics.extractions.load(Ordering::SeqCst), 0);
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_dependency_references_zero_locations() {
    let h = Harness::new(
        FakeResolver::returning(vec![]),
        referenceable_go(),
        FakeIndex::default(),
    );

    let err = h
        .service()
        .dependency_references(&RequestContext::new(), &position(7))
        .await
        .expect_err("nothing resolved");

    assert!(matches!(err, Error::ResolutionFailed { ref message, .. } if message.contains("zero locations")));
    assert_eq!(h.semantics.checks.load(Ordering::SeqCst), 0);
    assert_eq!(h.semantics.extractions.load(Ordering::SeqCst), 0);
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_dependency_references_uses_first_location() {
    let second = symbol_location(
        json!({"name": "Other", "package": "github.com/other/pkg"}),
        "git://github.com/other/pkg?def#other.go",
    );
    let h = Harness::new(
        FakeResolver::returning(vec![go_package_symbol(), second]),
        referenceable_go(),
        FakeIndex::default(),
    );

    let result = h
        .service()
        .dependency_references(&RequestContext::new(), &position(7))
        .await
        .expect("references");

    assert_eq!(result.location, go_package_symbol());
    assert_eq!(h.index.by_package_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dependency_references_backend_failure() {
    let h = Harness::new(
        FakeResolver::new(ResolverBehavior::Fail),
        referenceable_go(),
        FakeIndex::default(),
    );

    let err = h
        .service()
        .dependency_references(&RequestContext::new(), &position(7))
        .await
        .expect_err("backend down");

    assert!(matches!(err, Error::ResolutionFailed { source: Some(_), .. }));
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_dependency_references_missing_descriptor() {
    let h = Harness::new(
        FakeResolver::returning(vec![go_package_symbol()]),
        FakeSemantics::new(true, None),
        FakeIndex::default(),
    );

    let err = h
        .service()
        .dependency_references(&RequestContext::new(), &position(7))
        .await
        .expect_err("no descriptor");

    assert!(matches!(err, Error::DescriptorUnavailable { ref language, .. } if language == "go"));
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test]
async fn test_dependency_references_cancelled_while_resolving() {
    let h = Harness::new(
        FakeResolver::new(ResolverBehavior::Hang),
        referenceable_go(),
        FakeIndex::default(),
    );
    let token = CancellationToken::new();
    let ctx = RequestContext::new().with_cancellation(token.clone());
    let service = h.service();

    let canceller = tokio::spawn(async move {
        tokio::task::yield_now().await;
        token.cancel();
    });
    let err = service
        .dependency_references(&ctx, &position(7))
        .await
        .expect_err("cancelled");
    canceller.await.expect("canceller");

    assert!(matches!(err, Error::Cancelled { .. }));
    assert_eq!(h.index.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dependency_references_deadline() {
    let h = Harness::new(
        FakeResolver::new(ResolverBehavior::Hang),
        referenceable_go(),
        FakeIndex::default(),
    );
    let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));

    let err = h
        .service()
        .dependency_references(&ctx, &position(7))
        .await
        .expect_err("deadline");

    assert!(matches!(err, Error::DeadlineExceeded { .. }));
}

// ============================================================================
// RefreshIndex
// ============================================================================

#[tokio::test]
async fn test_refresh_index_is_idempotent() {
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), FakeIndex::default());
    let service = h.service();
    let ctx = RequestContext::new();

    service
        .refresh_index(&ctx, "github.com/gorilla/mux", "abc")
        .await
        .expect("first");
    let once = h.index.refreshed.lock().expect("lock").clone();
    service
        .refresh_index(&ctx, "github.com/gorilla/mux", "abc")
        .await
        .expect("second");
    let twice = h.index.refreshed.lock().expect("lock").clone();

    assert_eq!(once, twice);
    assert_eq!(
        once.get("github.com/gorilla/mux"),
        Some(&("abc".to_string(), vec!["go".to_string()]))
    );
}

#[tokio::test]
async fn test_refresh_index_requires_authorization() {
    let h = Harness::new(FakeResolver::returning(vec![]), referenceable_go(), FakeIndex::default());

    let err = h
        .service()
        .refresh_index(&RequestContext::new(), "github.com/acme/secret", "abc")
        .await
        .expect_err("forbidden");

    assert!(matches!(err, Error::Unauthorized { .. }));
    assert_eq!(h.index.refresh_calls.load(Ordering::SeqCst), 0);
}
