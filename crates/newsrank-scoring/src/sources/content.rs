use std::sync::Arc;

use async_trait::async_trait;
use newsrank_core::errors::RankResult;
use newsrank_core::models::{Article, Signal};
use newsrank_core::traits::{ContentAnalyzer, MetricSource, ScoreStore};
use newsrank_core::ScoringContext;
use newsrank_observability::tracing_setup::events;

/// Content-importance sub-score.
///
/// Reuses a cached analysis younger than 24h; otherwise asks the analyzer,
/// persists the result, and returns its importance score.
pub struct ContentSource {
    store: Arc<dyn ScoreStore>,
    analyzer: Arc<dyn ContentAnalyzer>,
}

impl ContentSource {
    pub fn new(store: Arc<dyn ScoreStore>, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        Self { store, analyzer }
    }
}

#[async_trait]
impl MetricSource for ContentSource {
    fn signal(&self) -> Signal {
        Signal::Content
    }

    async fn score(&self, ctx: &ScoringContext, article: &Article) -> RankResult<f64> {
        match self.store.get_content_analysis(&article.id).await {
            Ok(Some(cached)) if cached.is_fresh(ctx.now) => {
                return Ok(cached.importance_score.clamp(0.0, 1.0));
            }
            Ok(_) => {}
            // A broken cache read is a cache miss, not a scoring failure.
            Err(e) => tracing::warn!(
                article_id = %article.id,
                error = %e,
                "content analysis cache read failed"
            ),
        }

        let mut analysis = self
            .analyzer
            .analyze_content(&article.title, &article.content)
            .await?;
        analysis.article_id = article.id.clone();
        analysis.processed_at = ctx.now;

        if let Err(e) = self.store.upsert_content_analysis(&analysis).await {
            events::persist_failed("content_analysis", &article.id, &e.to_string());
        }

        Ok(analysis.importance_score.clamp(0.0, 1.0))
    }

    fn fallback(&self, article: &Article) -> f64 {
        basic_content_score(article)
    }
}

/// Cheap local heuristic used when the analyzer is unavailable.
///
/// Base 0.5; +0.1 title of 30 to 80 chars; +0.2 body of 500 to 5000 chars;
/// +0.1 image present; +0.1 summary present; capped at 1.0.
pub fn basic_content_score(article: &Article) -> f64 {
    let mut score: f64 = 0.5;

    let title_len = article.title.chars().count();
    if (30..=80).contains(&title_len) {
        score += 0.1;
    }

    let body_len = article.content.chars().count();
    if (500..=5000).contains(&body_len) {
        score += 0.2;
    }

    if article.has_image() {
        score += 0.1;
    }
    if article.has_summary() {
        score += 0.1;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(title_len: usize, body_len: usize) -> Article {
        Article {
            id: "a".into(),
            title: "t".repeat(title_len),
            content: "b".repeat(body_len),
            summary: None,
            url: "https://news.test/a".into(),
            source: "Reuters".into(),
            category: "world".into(),
            image_url: None,
            published_at: Utc::now(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn bare_article_scores_the_base() {
        assert_close(basic_content_score(&article(0, 0)), 0.5);
    }

    #[test]
    fn title_bonus_applies_within_30_to_80_chars() {
        assert_close(basic_content_score(&article(29, 0)), 0.5);
        assert_close(basic_content_score(&article(30, 0)), 0.6);
        assert_close(basic_content_score(&article(80, 0)), 0.6);
        assert_close(basic_content_score(&article(81, 0)), 0.5);
    }

    #[test]
    fn body_bonus_applies_within_500_to_5000_chars() {
        assert_close(basic_content_score(&article(0, 499)), 0.5);
        assert_close(basic_content_score(&article(0, 500)), 0.7);
        assert_close(basic_content_score(&article(0, 5000)), 0.7);
        assert_close(basic_content_score(&article(0, 5001)), 0.5);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let mut a = article(0, 0);
        a.title = "é".repeat(30);
        assert_close(basic_content_score(&a), 0.6);
    }

    #[test]
    fn blank_summary_and_image_earn_nothing() {
        let mut a = article(0, 0);
        a.summary = Some(String::new());
        a.image_url = Some("   ".into());
        assert_close(basic_content_score(&a), 0.5);

        a.summary = Some("Short recap.".into());
        assert_close(basic_content_score(&a), 0.6);
        a.image_url = Some("https://news.test/a.png".into());
        assert_close(basic_content_score(&a), 0.7);
    }

    #[test]
    fn all_bonuses_cap_at_one() {
        let mut a = article(50, 1000);
        a.summary = Some("Recap".into());
        a.image_url = Some("https://news.test/a.png".into());
        let score = basic_content_score(&a);
        assert!(score <= 1.0);
        assert_close(score, 1.0);
    }
}
