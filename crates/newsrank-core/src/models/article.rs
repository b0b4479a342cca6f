use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as supplied by the article source. Read-only to the ranking core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Immutable once created.
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub url: String,
    /// Source (outlet) name, the key for credibility lookups.
    pub source: String,
    /// Raw category label; normalized by the balancer.
    pub category: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Article {
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Age at `now`; negative ages (future publish times) clamp to zero.
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        (now - self.published_at).max(chrono::Duration::zero())
    }
}
