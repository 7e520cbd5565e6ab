//! Tests for request cancellation and deadlines

use std::time::Duration;
use tokio_util::sync::CancellationToken;
use xdeps_application::RequestContext;
use xdeps_domain::{Error, Result};

#[tokio::test]
async fn test_run_passes_result_through() {
    let ctx = RequestContext::new();
    let value = ctx.run("step", async { Ok::<_, Error>(5) }).await;
    assert_eq!(value.expect("value"), 5);
}

#[tokio::test]
async fn test_cancelled_before_start_skips_step() {
    let token = CancellationToken::new();
    token.cancel();
    let ctx = RequestContext::new().with_cancellation(token);

    let mut started = false;
    let result: Result<()> = ctx
        .run("step", async {
            started = true;
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(Error::Cancelled { ref operation }) if operation == "step"));
    assert!(!started);
}

#[tokio::test]
async fn test_cancellation_drops_in_flight_step() {
    let token = CancellationToken::new();
    let ctx = RequestContext::new().with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::task::yield_now().await;
        token.cancel();
    });
    let result: Result<()> = ctx
        .run("slow", async {
            std::future::pending::<()>().await;
            Ok(())
        })
        .await;
    canceller.await.expect("canceller");

    assert!(matches!(result, Err(Error::Cancelled { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_deadline_exceeded() {
    let ctx = RequestContext::new().with_timeout(Duration::from_secs(1));
    let result: Result<()> = ctx
        .run("slow", async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        })
        .await;

    match result {
        Err(e @ Error::DeadlineExceeded { .. }) => assert!(e.is_cancellation()),
        other => panic!("expected deadline error, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_expired_deadline_fails_fast() {
    let ctx = RequestContext::new().with_timeout(Duration::from_millis(10));
    tokio::time::advance(Duration::from_millis(20)).await;
    assert!(matches!(
        ctx.ensure_active("next"),
        Err(Error::DeadlineExceeded { .. })
    ));
}
