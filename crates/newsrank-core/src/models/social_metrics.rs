use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SOCIAL_METRICS_FRESHNESS_HOURS;

/// Social signals for an article URL. Keyed by URL since shares are counted externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub url: String,
    pub twitter_shares: u64,
    pub facebook_shares: u64,
    pub linkedin_shares: u64,
    pub reddit_score: u64,
    pub total_shares: u64,
    pub social_mentions: u64,
    /// Platform -> sentiment in [-1.0, 1.0].
    pub sentiment_by_platform: BTreeMap<String, f64>,
    pub last_fetched: DateTime<Utc>,
}

impl SocialMetrics {
    /// Metrics fetched less than 6h ago are reused rather than refetched.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.last_fetched < chrono::Duration::hours(SOCIAL_METRICS_FRESHNESS_HOURS)
    }
}
