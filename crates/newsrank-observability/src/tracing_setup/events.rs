//! Structured log events for key ranking operations.
//!
//! Each function emits a `tracing` event with structured fields.

use std::time::Duration;

use newsrank_core::models::Signal;

/// A sub-scorer failed or timed out and its default was used.
pub fn signal_fallback(signal: Signal, article_id: &str, failure: &str, fallback: f64) {
    tracing::warn!(
        event = "signal_fallback",
        signal = %signal,
        article_id = %article_id,
        failure = %failure,
        fallback = fallback,
        "sub-score fell back to default"
    );
}

/// A best-effort write-back failed; the in-memory result is still used.
pub fn persist_failed(entity: &str, key: &str, error: &str) {
    tracing::warn!(
        event = "persist_failed",
        entity = %entity,
        key = %key,
        error = %error,
        "write-back failed"
    );
}

/// An article was dropped from a batch because its scoring failed outright.
pub fn article_dropped(article_id: &str, reason: &str) {
    tracing::warn!(
        event = "article_dropped",
        article_id = %article_id,
        reason = %reason,
        "article dropped from ranking batch"
    );
}

/// Top stories were ranked.
pub fn top_stories_ranked(candidates: usize, scored: usize, returned: usize, elapsed: Duration) {
    tracing::info!(
        event = "top_stories_ranked",
        candidates = candidates,
        scored = scored,
        returned = returned,
        elapsed_ms = elapsed.as_millis() as u64,
        "top stories calculation completed"
    );
}

/// A score refresh pass finished.
pub fn refresh_completed(total: usize, succeeded: usize, failed: usize, elapsed: Duration) {
    tracing::info!(
        event = "refresh_completed",
        total = total,
        succeeded = succeeded,
        failed = failed,
        elapsed_ms = elapsed.as_millis() as u64,
        "score refresh completed"
    );
}

/// An engagement event was recorded.
pub fn engagement_tracked(article_id: &str, kind: &str) {
    tracing::debug!(
        event = "engagement_tracked",
        article_id = %article_id,
        kind = %kind,
        "engagement recorded"
    );
}

/// A ranking batch was aborted by cancellation.
pub fn batch_cancelled(operation: &str, completed: usize, total: usize) {
    tracing::info!(
        event = "batch_cancelled",
        operation = %operation,
        completed = completed,
        total = total,
        "batch cancelled"
    );
}
