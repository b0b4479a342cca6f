//! Per-request scoring context: the evaluation instant and the batch cancellation token.

use chrono::{DateTime, Utc};
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Carries everything a scoring pass needs that is not part of the article.
///
/// All freshness checks, recency, and `last_updated` stamps read `now` from here,
/// so scoring the same article twice with the same context is deterministic.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub now: DateTime<Utc>,
    cancel: CancellationToken,
}

impl ScoringContext {
    /// Context evaluated at the current wall-clock time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Context evaluated at a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token, e.g. with a child of a request-scoped token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Abort every operation running under this context.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Resolves once the context is cancelled.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self::new()
    }
}
