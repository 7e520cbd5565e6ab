//! Timing instrumentation helpers

use std::time::{Duration, Instant};

/// Tracks the elapsed time of one operation
///
/// # Example
///
/// ```
/// use xdeps_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// assert!(timer.elapsed_secs() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before `budget` runs out, `None` once exceeded
    pub fn remaining(&self, budget: Duration) -> Option<Duration> {
        budget.checked_sub(self.start.elapsed())
    }
}
