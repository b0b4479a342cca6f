use async_trait::async_trait;

use crate::errors::RankResult;
use crate::models::{
    ArticleScore, ContentAnalysis, EngagementMetrics, EngagementUpdate, SocialMetrics,
    SourceCredibility,
};

/// Persistence contract for scores and the metrics they are computed from.
///
/// All writes are upserts. `record_engagement` must be atomic per article
/// (`count = count + delta` at the persistence layer), since tracking calls
/// race with each other.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    // --- Scores ---
    async fn upsert_article_score(&self, score: &ArticleScore) -> RankResult<()>;
    async fn get_article_score(&self, article_id: &str) -> RankResult<Option<ArticleScore>>;
    /// Ids of persisted scores with `final_score >= min_score`, best first.
    async fn top_scored_articles(&self, limit: usize, min_score: f64) -> RankResult<Vec<String>>;

    // --- Engagement ---
    async fn get_engagement(&self, article_id: &str) -> RankResult<Option<EngagementMetrics>>;
    /// Creates the record on first use.
    async fn record_engagement(&self, article_id: &str, update: EngagementUpdate)
        -> RankResult<()>;

    // --- Source credibility ---
    async fn get_source_credibility(&self, source: &str) -> RankResult<Option<SourceCredibility>>;
    async fn upsert_source_credibility(&self, credibility: &SourceCredibility) -> RankResult<()>;

    // --- Content analysis ---
    async fn get_content_analysis(&self, article_id: &str) -> RankResult<Option<ContentAnalysis>>;
    async fn upsert_content_analysis(&self, analysis: &ContentAnalysis) -> RankResult<()>;

    // --- Social metrics ---
    async fn get_social_metrics(&self, url: &str) -> RankResult<Option<SocialMetrics>>;
    async fn upsert_social_metrics(&self, metrics: &SocialMetrics) -> RankResult<()>;
}
