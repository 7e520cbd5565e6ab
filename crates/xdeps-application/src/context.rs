//! Request context
//!
//! Carries the caller's cancellation token and deadline through every
//! blocking step of an operation. A step that is cancelled or runs past the
//! deadline is dropped, which aborts whatever I/O it had in flight.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use xdeps_domain::error::{Error, Result};

/// Per-request cancellation and deadline
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the caller's cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fail steps that are still running `timeout` from now
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Fail steps that are still running at `deadline`
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The cancellation token of this request
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Deadline of this request, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail fast when the request is already cancelled or expired
    pub fn ensure_active(&self, operation: &str) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::cancelled(operation));
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(Error::deadline_exceeded(operation));
        }
        Ok(())
    }

    /// Run one blocking step under this context
    pub async fn run<T, F>(&self, operation: &str, step: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.ensure_active(operation)?;

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, step)
                    .await
                    .map_err(|_| Error::deadline_exceeded(operation))?,
                None => step.await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::cancelled(operation)),
            result = bounded => result,
        }
    }
}
