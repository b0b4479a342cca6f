use std::sync::Arc;

use async_trait::async_trait;
use newsrank_core::errors::RankResult;
use newsrank_core::models::{Article, EngagementMetrics, Signal};
use newsrank_core::traits::{MetricSource, ScoreStore};
use newsrank_core::ScoringContext;

use super::log_scaled;

/// Score used when an article has no recorded engagement.
pub const NEUTRAL_ENGAGEMENT: f64 = 0.5;

/// Average read time treated as full marks (seconds).
const READ_TIME_REFERENCE_SECS: f64 = 300.0;

/// Engagement sub-score from view/click/share counters, read time, and bounce rate.
pub struct EngagementSource {
    store: Arc<dyn ScoreStore>,
}

impl EngagementSource {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetricSource for EngagementSource {
    fn signal(&self) -> Signal {
        Signal::Engagement
    }

    async fn score(&self, _ctx: &ScoringContext, article: &Article) -> RankResult<f64> {
        match self.store.get_engagement(&article.id).await? {
            Some(metrics) if metrics.has_activity() => Ok(normalize_engagement(&metrics)),
            Some(_) => Ok(NEUTRAL_ENGAGEMENT),
            None => {
                tracing::warn!(
                    article_id = %article.id,
                    "no engagement metrics recorded, using neutral score"
                );
                Ok(NEUTRAL_ENGAGEMENT)
            }
        }
    }

    fn fallback(&self, _article: &Article) -> f64 {
        NEUTRAL_ENGAGEMENT
    }
}

/// Combine engagement counters into `[0, 1]`.
///
/// ```text
/// views 0.2 · log10(v+1)/6
/// clicks 0.3 · log10(c+1)/5
/// shares 0.2 · log10(s+1)/4
/// read time 0.2 · min(t/300s, 1)
/// bounce 0.1 · (1 - bounce_rate)
/// ```
pub fn normalize_engagement(metrics: &EngagementMetrics) -> f64 {
    let view = log_scaled(metrics.view_count, 6.0);
    let click = log_scaled(metrics.click_count, 5.0);
    let share = log_scaled(metrics.share_count, 4.0);
    let read_time = (metrics.average_read_time.max(0.0) / READ_TIME_REFERENCE_SECS).min(1.0);
    let bounce = 1.0 - metrics.bounce_rate.clamp(0.0, 1.0);

    (view * 0.2 + click * 0.3 + share * 0.2 + read_time * 0.2 + bounce * 0.1).clamp(0.0, 1.0)
}
