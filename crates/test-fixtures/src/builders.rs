use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;

use newsrank_core::models::Article;

/// The instant every fixture is relative to: 2025-06-01T12:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixture timestamp is valid"))
}

/// Fluent builder for [`Article`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            article: Article {
                id: id.to_string(),
                title: format!("Headline for {id}"),
                content: format!("Body text for {id}."),
                summary: None,
                url: format!("https://news.example.com/{id}"),
                source: "Example Wire".to_string(),
                category: "general".to_string(),
                image_url: None,
                published_at: fixed_now() - Duration::hours(1),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.article.title = title.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.article.content = content.to_string();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.article.summary = Some(summary.to_string());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.article.url = url.to_string();
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.article.source = source.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.article.category = category.to_string();
        self
    }

    pub fn image(mut self, image_url: &str) -> Self {
        self.article.image_url = Some(image_url.to_string());
        self
    }

    /// Published this many hours before [`fixed_now`].
    pub fn hours_ago(mut self, hours: i64) -> Self {
        self.article.published_at = fixed_now() - Duration::hours(hours);
        self
    }

    /// Published this many minutes before [`fixed_now`].
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.article.published_at = fixed_now() - Duration::minutes(minutes);
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.article.published_at = at;
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

#[derive(Deserialize)]
struct GoldenArticle {
    id: String,
    title: String,
    content: String,
    summary: Option<String>,
    url: String,
    source: String,
    category: String,
    image_url: Option<String>,
    hours_ago: i64,
}

const GOLDEN_ARTICLES: &str = include_str!("../data/articles.json");

/// Twelve articles across eight raw category labels (including synonyms and an
/// unknown label), published 2–30 hours before [`fixed_now`].
///
/// # Panics
/// Panics if the embedded JSON is malformed.
pub fn golden_articles() -> Vec<Article> {
    let raw: Vec<GoldenArticle> = serde_json::from_str(GOLDEN_ARTICLES)
        .unwrap_or_else(|e| panic!("failed to parse golden articles: {e}"));
    raw.into_iter()
        .map(|g| Article {
            id: g.id,
            title: g.title,
            content: g.content,
            summary: g.summary,
            url: g.url,
            source: g.source,
            category: g.category,
            image_url: g.image_url,
            published_at: fixed_now() - Duration::hours(g.hours_ago),
        })
        .collect()
}
