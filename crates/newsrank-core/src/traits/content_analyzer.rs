use async_trait::async_trait;

use crate::errors::RankResult;
use crate::models::ContentAnalysis;

/// Content-analysis collaborator: title and body in, full analysis out.
///
/// The returned analysis has an empty `article_id`; callers attach it.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    async fn analyze_content(&self, title: &str, body: &str) -> RankResult<ContentAnalysis>;
}
