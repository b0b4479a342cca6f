//! SqliteStore: a single connection behind `tokio::sync::Mutex`.
//!
//! Writes are serialized through the mutex; engagement increments run as SQL
//! arithmetic inside a transaction, so concurrent trackers never lose updates.

pub mod migrations;
pub mod pragmas;
pub mod queries;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tokio::sync::Mutex;

use newsrank_core::errors::RankResult;
use newsrank_core::models::{
    Article, ArticleScore, ContentAnalysis, EngagementMetrics, EngagementUpdate, SocialMetrics,
    SourceCredibility,
};
use newsrank_core::traits::{ArticleSource, ScoreStore};

use crate::to_store_err;

/// Score store persisted to a SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file, apply pragmas, and migrate.
    pub fn open(path: &Path) -> RankResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        Self::initialize(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> RankResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        Self::initialize(conn, None)
    }

    fn initialize(conn: Connection, db_path: Option<PathBuf>) -> RankResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Acquire the connection and run `f` with it.
    pub async fn with_conn<F, T>(&self, f: F) -> RankResult<T>
    where
        F: FnOnce(&Connection) -> RankResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }

    /// Add or replace an article.
    pub async fn insert_article(&self, article: &Article) -> RankResult<()> {
        self.with_conn(|conn| queries::articles::upsert_article(conn, article))
            .await
    }

    /// Insert the built-in outlet ratings without overwriting existing ones.
    /// Returns how many rows were added.
    pub async fn seed_default_credibility(&self) -> RankResult<usize> {
        let outlets = SourceCredibility::default_outlets(Utc::now());
        let inserted = self
            .with_conn(|conn| queries::metrics::insert_credibility_if_absent(conn, &outlets))
            .await?;
        tracing::info!(inserted, "seeded default source credibility");
        Ok(inserted)
    }

    pub async fn schema_version(&self) -> RankResult<u32> {
        self.with_conn(migrations::current_version).await
    }
}

#[async_trait]
impl ArticleSource for SqliteStore {
    async fn recent_articles(
        &self,
        max_age: chrono::Duration,
        now: DateTime<Utc>,
    ) -> RankResult<Vec<Article>> {
        let start = now
            .checked_sub_signed(max_age)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.with_conn(|conn| queries::articles::articles_between(conn, start, now))
            .await
    }

    async fn articles_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RankResult<Vec<Article>> {
        self.with_conn(|conn| queries::articles::articles_between(conn, start, end))
            .await
    }

    async fn articles_by_ids(&self, ids: &[String]) -> RankResult<Vec<Article>> {
        self.with_conn(|conn| queries::articles::articles_by_ids(conn, ids))
            .await
    }
}

#[async_trait]
impl ScoreStore for SqliteStore {
    async fn upsert_article_score(&self, score: &ArticleScore) -> RankResult<()> {
        self.with_conn(|conn| queries::scores::upsert_score(conn, score))
            .await
    }

    async fn get_article_score(&self, article_id: &str) -> RankResult<Option<ArticleScore>> {
        self.with_conn(|conn| queries::scores::get_score(conn, article_id))
            .await
    }

    async fn top_scored_articles(&self, limit: usize, min_score: f64) -> RankResult<Vec<String>> {
        self.with_conn(|conn| queries::scores::top_scored(conn, limit, min_score))
            .await
    }

    async fn get_engagement(&self, article_id: &str) -> RankResult<Option<EngagementMetrics>> {
        self.with_conn(|conn| queries::engagement::get_engagement(conn, article_id))
            .await
    }

    async fn record_engagement(
        &self,
        article_id: &str,
        update: EngagementUpdate,
    ) -> RankResult<()> {
        let now = Utc::now();
        self.with_conn(|conn| queries::engagement::record_engagement(conn, article_id, update, now))
            .await
    }

    async fn get_source_credibility(&self, source: &str) -> RankResult<Option<SourceCredibility>> {
        self.with_conn(|conn| queries::metrics::get_credibility(conn, source))
            .await
    }

    async fn upsert_source_credibility(&self, credibility: &SourceCredibility) -> RankResult<()> {
        self.with_conn(|conn| queries::metrics::upsert_credibility(conn, credibility))
            .await
    }

    async fn get_content_analysis(&self, article_id: &str) -> RankResult<Option<ContentAnalysis>> {
        self.with_conn(|conn| queries::metrics::get_analysis(conn, article_id))
            .await
    }

    async fn upsert_content_analysis(&self, analysis: &ContentAnalysis) -> RankResult<()> {
        self.with_conn(|conn| queries::metrics::upsert_analysis(conn, analysis))
            .await
    }

    async fn get_social_metrics(&self, url: &str) -> RankResult<Option<SocialMetrics>> {
        self.with_conn(|conn| queries::metrics::get_social(conn, url))
            .await
    }

    async fn upsert_social_metrics(&self, metrics: &SocialMetrics) -> RankResult<()> {
        self.with_conn(|conn| queries::metrics::upsert_social(conn, metrics))
            .await
    }
}
