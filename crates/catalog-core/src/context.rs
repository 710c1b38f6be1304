//! Per-request context carrying the request id, cancellation token, and deadline.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::AppError;
use crate::result::AppResult;

/// Context for the current request.
///
/// Created at the HTTP boundary and threaded through services, validators
/// and repositories so that every storage call observes client
/// cancellation and the request deadline.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id (the `x-request-id` header when present).
    pub request_id: String,
    /// Cancelled when the caller goes away.
    cancel: CancellationToken,
    /// Absolute point in time after which work is abandoned.
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context with a fresh request id and no deadline.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Replaces the request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Sets the deadline relative to now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Returns the cancellation token.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the request was cancelled or has run past its deadline.
    pub fn is_done(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Drives `work` to completion unless the request is cancelled or its
    /// deadline elapses first.
    pub async fn run<T, F>(&self, work: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.is_done() {
            return Err(AppError::cancelled("Request cancelled"));
        }

        let deadline = async {
            match self.deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(AppError::cancelled("Request cancelled")),
            _ = deadline => Err(AppError::cancelled("Request deadline exceeded")),
            result = work => result,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
