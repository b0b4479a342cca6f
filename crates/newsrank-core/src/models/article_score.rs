use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Signal;

/// Score breakdown for one article. Upserted on every scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleScore {
    pub article_id: String,
    pub engagement_score: f64,
    pub credibility_score: f64,
    pub content_score: f64,
    pub social_score: f64,
    pub recency_score: f64,
    /// Weighted mean of the sub-scores, in [0, 1].
    pub final_score: f64,
    /// Signals whose value came from a fallback default on this pass.
    #[serde(default)]
    pub fallbacks: Vec<Signal>,
    pub last_updated: DateTime<Utc>,
}

impl ArticleScore {
    pub fn sub_score(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Engagement => self.engagement_score,
            Signal::Credibility => self.credibility_score,
            Signal::Content => self.content_score,
            Signal::Social => self.social_score,
            Signal::Recency => self.recency_score,
        }
    }

    /// True when any signal was produced by a fallback.
    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}
