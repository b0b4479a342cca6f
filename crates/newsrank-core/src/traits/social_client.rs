use async_trait::async_trait;

use crate::errors::RankResult;
use crate::models::SocialMetrics;

/// Social-metrics collaborator.
#[async_trait]
pub trait SocialMetricsClient: Send + Sync {
    /// Fetch fresh metrics for all platforms.
    async fn social_metrics(&self, url: &str) -> RankResult<SocialMetrics>;

    async fn twitter_shares(&self, url: &str) -> RankResult<u64> {
        Ok(self.social_metrics(url).await?.twitter_shares)
    }

    async fn facebook_shares(&self, url: &str) -> RankResult<u64> {
        Ok(self.social_metrics(url).await?.facebook_shares)
    }

    async fn reddit_score(&self, url: &str) -> RankResult<u64> {
        Ok(self.social_metrics(url).await?.reddit_score)
    }
}
