use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CONTENT_ANALYSIS_FRESHNESS_HOURS;

/// Result of analyzing an article's title and body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub article_id: String,
    /// [-1.0, 1.0]
    pub sentiment_score: f64,
    /// [0.0, 1.0]
    pub importance_score: f64,
    /// [0.0, 1.0]
    pub readability_score: f64,
    /// Ordered by frequency, most frequent first.
    pub keywords: Vec<String>,
    /// Entity text -> entity type.
    pub entities: BTreeMap<String, String>,
    pub topic: String,
    pub language: String,
    pub processed_at: DateTime<Utc>,
}

impl ContentAnalysis {
    /// An analysis younger than 24h is reused rather than recomputed.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.processed_at < chrono::Duration::hours(CONTENT_ANALYSIS_FRESHNESS_HOURS)
    }
}
