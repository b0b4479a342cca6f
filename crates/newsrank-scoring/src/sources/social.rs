use std::sync::Arc;

use async_trait::async_trait;
use newsrank_core::errors::RankResult;
use newsrank_core::models::{Article, Signal, SocialMetrics};
use newsrank_core::traits::{MetricSource, ScoreStore, SocialMetricsClient};
use newsrank_core::ScoringContext;
use newsrank_observability::tracing_setup::events;

use super::log_scaled;

/// Score used when social metrics cannot be fetched.
pub const DEFAULT_SOCIAL: f64 = 0.3;

/// Social-buzz sub-score, keyed by article URL.
///
/// Reuses cached metrics younger than 6h; otherwise fetches, persists, and normalizes.
pub struct SocialSource {
    store: Arc<dyn ScoreStore>,
    client: Arc<dyn SocialMetricsClient>,
}

impl SocialSource {
    pub fn new(store: Arc<dyn ScoreStore>, client: Arc<dyn SocialMetricsClient>) -> Self {
        Self { store, client }
    }
}

#[async_trait]
impl MetricSource for SocialSource {
    fn signal(&self) -> Signal {
        Signal::Social
    }

    async fn score(&self, ctx: &ScoringContext, article: &Article) -> RankResult<f64> {
        match self.store.get_social_metrics(&article.url).await {
            Ok(Some(cached)) if cached.is_fresh(ctx.now) => return Ok(normalize_social(&cached)),
            Ok(_) => {}
            Err(e) => tracing::warn!(
                url = %article.url,
                error = %e,
                "social metrics cache read failed"
            ),
        }

        let mut metrics = self.client.social_metrics(&article.url).await?;
        metrics.url = article.url.clone();
        metrics.last_fetched = ctx.now;

        if let Err(e) = self.store.upsert_social_metrics(&metrics).await {
            events::persist_failed("social_metrics", &article.url, &e.to_string());
        }

        Ok(normalize_social(&metrics))
    }

    fn fallback(&self, _article: &Article) -> f64 {
        DEFAULT_SOCIAL
    }
}

/// Mean of per-platform log-scaled counts: Twitter/Facebook saturate at 10^4,
/// LinkedIn/Reddit at 10^3.
pub fn normalize_social(metrics: &SocialMetrics) -> f64 {
    let twitter = log_scaled(metrics.twitter_shares, 4.0);
    let facebook = log_scaled(metrics.facebook_shares, 4.0);
    let linkedin = log_scaled(metrics.linkedin_shares, 3.0);
    let reddit = log_scaled(metrics.reddit_score, 3.0);

    ((twitter + facebook + linkedin + reddit) / 4.0).min(1.0)
}
