//! In-memory store backed by `DashMap`.
//!
//! Engagement updates are applied while holding the entry's shard lock, so
//! concurrent `record_engagement` calls never lose increments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use newsrank_core::errors::RankResult;
use newsrank_core::models::{
    Article, ArticleScore, ContentAnalysis, EngagementMetrics, EngagementUpdate, SocialMetrics,
    SourceCredibility,
};
use newsrank_core::traits::{ArticleSource, ScoreStore};

/// Thread-safe store holding articles, scores, and metrics in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: DashMap<String, Article>,
    scores: DashMap<String, ArticleScore>,
    engagement: DashMap<String, EngagementMetrics>,
    credibility: DashMap<String, SourceCredibility>,
    analyses: DashMap<String, ContentAnalysis>,
    social: DashMap<String, SocialMetrics>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an article.
    pub fn insert_article(&self, article: Article) {
        self.articles.insert(article.id.clone(), article);
    }

    pub fn insert_articles(&self, articles: impl IntoIterator<Item = Article>) {
        for article in articles {
            self.insert_article(article);
        }
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn score_count(&self) -> usize {
        self.scores.len()
    }

    /// Insert the built-in outlet ratings without overwriting existing ones.
    pub fn seed_default_credibility(&self) {
        for outlet in SourceCredibility::default_outlets(Utc::now()) {
            self.credibility
                .entry(outlet.source_name.clone())
                .or_insert(outlet);
        }
    }

    fn sorted_newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        articles
    }
}

#[async_trait]
impl ArticleSource for MemoryStore {
    async fn recent_articles(
        &self,
        max_age: chrono::Duration,
        now: DateTime<Utc>,
    ) -> RankResult<Vec<Article>> {
        let cutoff = now
            .checked_sub_signed(max_age)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let recent = self
            .articles
            .iter()
            .filter(|a| a.published_at >= cutoff && a.published_at <= now)
            .map(|a| a.value().clone())
            .collect();
        Ok(Self::sorted_newest_first(recent))
    }

    async fn articles_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RankResult<Vec<Article>> {
        let in_range = self
            .articles
            .iter()
            .filter(|a| a.published_at >= start && a.published_at <= end)
            .map(|a| a.value().clone())
            .collect();
        Ok(Self::sorted_newest_first(in_range))
    }

    async fn articles_by_ids(&self, ids: &[String]) -> RankResult<Vec<Article>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.articles.get(id).map(|a| a.value().clone()))
            .collect())
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn upsert_article_score(&self, score: &ArticleScore) -> RankResult<()> {
        self.scores.insert(score.article_id.clone(), score.clone());
        Ok(())
    }

    async fn get_article_score(&self, article_id: &str) -> RankResult<Option<ArticleScore>> {
        Ok(self.scores.get(article_id).map(|s| s.value().clone()))
    }

    async fn top_scored_articles(&self, limit: usize, min_score: f64) -> RankResult<Vec<String>> {
        let mut qualifying: Vec<(String, f64)> = self
            .scores
            .iter()
            .filter(|s| s.final_score >= min_score)
            .map(|s| (s.article_id.clone(), s.final_score))
            .collect();
        qualifying.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        qualifying.truncate(limit);
        Ok(qualifying.into_iter().map(|(id, _)| id).collect())
    }

    async fn get_engagement(&self, article_id: &str) -> RankResult<Option<EngagementMetrics>> {
        Ok(self.engagement.get(article_id).map(|m| m.value().clone()))
    }

    async fn record_engagement(
        &self,
        article_id: &str,
        update: EngagementUpdate,
    ) -> RankResult<()> {
        let now = Utc::now();
        self.engagement
            .entry(article_id.to_string())
            .or_insert_with(|| EngagementMetrics::new(article_id, now))
            .apply(update, now);
        Ok(())
    }

    async fn get_source_credibility(&self, source: &str) -> RankResult<Option<SourceCredibility>> {
        Ok(self.credibility.get(source).map(|c| c.value().clone()))
    }

    async fn upsert_source_credibility(&self, credibility: &SourceCredibility) -> RankResult<()> {
        self.credibility
            .insert(credibility.source_name.clone(), credibility.clone());
        Ok(())
    }

    async fn get_content_analysis(&self, article_id: &str) -> RankResult<Option<ContentAnalysis>> {
        Ok(self.analyses.get(article_id).map(|a| a.value().clone()))
    }

    async fn upsert_content_analysis(&self, analysis: &ContentAnalysis) -> RankResult<()> {
        self.analyses
            .insert(analysis.article_id.clone(), analysis.clone());
        Ok(())
    }

    async fn get_social_metrics(&self, url: &str) -> RankResult<Option<SocialMetrics>> {
        Ok(self.social.get(url).map(|m| m.value().clone()))
    }

    async fn upsert_social_metrics(&self, metrics: &SocialMetrics) -> RankResult<()> {
        self.social.insert(metrics.url.clone(), metrics.clone());
        Ok(())
    }
}
