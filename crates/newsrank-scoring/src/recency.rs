//! Recency decay: `exp(-rate * age / max_age)`, zero at or beyond `max_age`.

use chrono::{DateTime, Utc};
use newsrank_core::constants::RECENCY_DECAY_RATE;

/// Recency score in `[0.0, 1.0]`.
///
/// Articles published in the future count as age zero. A non-positive `max_age`
/// makes every article stale.
pub fn score(published_at: DateTime<Utc>, now: DateTime<Utc>, max_age: chrono::Duration) -> f64 {
    let max_ms = max_age.num_milliseconds();
    if max_ms <= 0 {
        return 0.0;
    }
    let age_ms = (now - published_at).num_milliseconds().max(0);
    if age_ms >= max_ms {
        return 0.0;
    }
    let normalized_age = age_ms as f64 / max_ms as f64;
    (-RECENCY_DECAY_RATE * normalized_age).exp()
}
