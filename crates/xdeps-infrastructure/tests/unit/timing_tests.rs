//! Timing Tests

use std::time::Duration;
use xdeps_infrastructure::utils::TimedOperation;

#[test]
fn test_elapsed_grows() {
    let timer = TimedOperation::start();
    std::thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed() >= Duration::from_millis(5));
    assert!(timer.elapsed_ms() >= 5);
    assert!(timer.elapsed_secs() > 0.0);
}

#[test]
fn test_remaining() {
    let timer = TimedOperation::start();
    assert!(timer.remaining(Duration::from_secs(60)).is_some());
    std::thread::sleep(Duration::from_millis(2));
    assert!(timer.remaining(Duration::from_millis(1)).is_none());
}
