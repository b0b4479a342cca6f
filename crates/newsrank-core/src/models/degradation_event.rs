use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Signal;

/// A signal fell back to its default for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub signal: Signal,
    pub article_id: String,
    pub failure: String,
    pub fallback_score: f64,
    pub timestamp: DateTime<Utc>,
}
