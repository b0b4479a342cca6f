//! v001: articles, article_scores, engagement_metrics, source_credibility,
//! content_analysis, social_metrics.
//!
//! Timestamps are RFC 3339 text with fixed nanosecond precision, so they sort
//! lexicographically.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS articles (
    id            TEXT PRIMARY KEY,
    title         TEXT NOT NULL,
    content       TEXT NOT NULL DEFAULT '',
    summary       TEXT,
    url           TEXT NOT NULL,
    source        TEXT NOT NULL,
    category      TEXT NOT NULL DEFAULT '',
    image_url     TEXT,
    published_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_articles_published_at ON articles(published_at DESC);

CREATE TABLE IF NOT EXISTS article_scores (
    article_id         TEXT PRIMARY KEY,
    engagement_score   REAL NOT NULL DEFAULT 0.0,
    credibility_score  REAL NOT NULL DEFAULT 0.0,
    content_score      REAL NOT NULL DEFAULT 0.0,
    social_score       REAL NOT NULL DEFAULT 0.0,
    recency_score      REAL NOT NULL DEFAULT 0.0,
    final_score        REAL NOT NULL DEFAULT 0.0,
    fallbacks          TEXT NOT NULL DEFAULT '[]',
    last_updated       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_article_scores_final_score ON article_scores(final_score DESC);

CREATE TABLE IF NOT EXISTS engagement_metrics (
    article_id         TEXT PRIMARY KEY,
    view_count         INTEGER NOT NULL DEFAULT 0,
    click_count        INTEGER NOT NULL DEFAULT 0,
    share_count        INTEGER NOT NULL DEFAULT 0,
    average_read_time  REAL NOT NULL DEFAULT 0.0,
    bounce_rate        REAL NOT NULL DEFAULT 0.0,
    last_updated       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS source_credibility (
    source_name        TEXT PRIMARY KEY,
    credibility_score  REAL NOT NULL DEFAULT 0.5,
    reliability_score  REAL NOT NULL DEFAULT 0.5,
    bias_score         REAL NOT NULL DEFAULT 0.0,
    factual_score      REAL NOT NULL DEFAULT 0.5,
    updated_at         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS content_analysis (
    article_id         TEXT PRIMARY KEY,
    sentiment_score    REAL NOT NULL DEFAULT 0.0,
    importance_score   REAL NOT NULL DEFAULT 0.5,
    readability_score  REAL NOT NULL DEFAULT 0.5,
    keywords           TEXT NOT NULL DEFAULT '[]',
    entities           TEXT NOT NULL DEFAULT '{}',
    topic              TEXT NOT NULL DEFAULT '',
    language           TEXT NOT NULL DEFAULT 'en',
    processed_at       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS social_metrics (
    url                TEXT PRIMARY KEY,
    twitter_shares     INTEGER NOT NULL DEFAULT 0,
    facebook_shares    INTEGER NOT NULL DEFAULT 0,
    linkedin_shares    INTEGER NOT NULL DEFAULT 0,
    reddit_score       INTEGER NOT NULL DEFAULT 0,
    total_shares       INTEGER NOT NULL DEFAULT 0,
    social_mentions    INTEGER NOT NULL DEFAULT 0,
    sentiment          TEXT NOT NULL DEFAULT '{}',
    last_fetched       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_social_metrics_last_fetched ON social_metrics(last_fetched);
";
