use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::RankResult;
use crate::models::Article;

/// Supplies candidate articles. Implemented by the news repository.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Articles published within `max_age` before `now`, in repository order.
    async fn recent_articles(
        &self,
        max_age: chrono::Duration,
        now: DateTime<Utc>,
    ) -> RankResult<Vec<Article>>;

    /// Articles published in `[start, end]`.
    async fn articles_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RankResult<Vec<Article>>;

    /// Articles for the given ids, in the order of `ids`. Unknown ids are skipped.
    async fn articles_by_ids(&self, ids: &[String]) -> RankResult<Vec<Article>>;
}
