//! source_credibility, content_analysis, social_metrics.

use std::collections::BTreeMap;

use rusqlite::{params, Connection, OptionalExtension};

use newsrank_core::errors::RankResult;
use newsrank_core::models::{ContentAnalysis, SocialMetrics, SourceCredibility};

use super::{fmt_ts, from_json, from_sql_count, parse_ts, to_json, to_sql_count};
use crate::to_store_err;

// --- Source credibility ---

pub fn get_credibility(conn: &Connection, source: &str) -> RankResult<Option<SourceCredibility>> {
    conn.query_row(
        "SELECT source_name, credibility_score, reliability_score, bias_score,
                factual_score, updated_at
         FROM source_credibility WHERE source_name = ?1",
        params![source],
        |row| {
            let updated_at: String = row.get(5)?;
            Ok(SourceCredibility {
                source_name: row.get(0)?,
                credibility_score: row.get(1)?,
                reliability_score: row.get(2)?,
                bias_score: row.get(3)?,
                factual_score: row.get(4)?,
                updated_at: parse_ts(&updated_at)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_store_err(format!("get_credibility: {e}")))
}

pub fn upsert_credibility(conn: &Connection, c: &SourceCredibility) -> RankResult<()> {
    conn.execute(
        "INSERT INTO source_credibility (
            source_name, credibility_score, reliability_score, bias_score,
            factual_score, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT(source_name) DO UPDATE SET
            credibility_score = excluded.credibility_score,
            reliability_score = excluded.reliability_score,
            bias_score = excluded.bias_score,
            factual_score = excluded.factual_score,
            updated_at = excluded.updated_at",
        params![
            c.source_name,
            c.credibility_score,
            c.reliability_score,
            c.bias_score,
            c.factual_score,
            fmt_ts(&c.updated_at),
        ],
    )
    .map_err(|e| to_store_err(format!("upsert_credibility: {e}")))?;
    Ok(())
}

/// Insert ratings that are not present yet; existing rows are left untouched.
pub fn insert_credibility_if_absent(
    conn: &Connection,
    outlets: &[SourceCredibility],
) -> RankResult<usize> {
    let mut inserted = 0;
    for c in outlets {
        inserted += conn
            .execute(
                "INSERT OR IGNORE INTO source_credibility (
                    source_name, credibility_score, reliability_score, bias_score,
                    factual_score, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    c.source_name,
                    c.credibility_score,
                    c.reliability_score,
                    c.bias_score,
                    c.factual_score,
                    fmt_ts(&c.updated_at),
                ],
            )
            .map_err(|e| to_store_err(format!("seed credibility {}: {e}", c.source_name)))?;
    }
    Ok(inserted)
}

// --- Content analysis ---

pub fn get_analysis(conn: &Connection, article_id: &str) -> RankResult<Option<ContentAnalysis>> {
    conn.query_row(
        "SELECT article_id, sentiment_score, importance_score, readability_score,
                keywords, entities, topic, language, processed_at
         FROM content_analysis WHERE article_id = ?1",
        params![article_id],
        |row| {
            let keywords: String = row.get(4)?;
            let entities: String = row.get(5)?;
            let processed_at: String = row.get(8)?;
            Ok(ContentAnalysis {
                article_id: row.get(0)?,
                sentiment_score: row.get(1)?,
                importance_score: row.get(2)?,
                readability_score: row.get(3)?,
                keywords: from_json::<Vec<String>>(&keywords)?,
                entities: from_json::<BTreeMap<String, String>>(&entities)?,
                topic: row.get(6)?,
                language: row.get(7)?,
                processed_at: parse_ts(&processed_at)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_store_err(format!("get_analysis: {e}")))
}

pub fn upsert_analysis(conn: &Connection, a: &ContentAnalysis) -> RankResult<()> {
    let keywords = to_json("content_analysis", &a.keywords)?;
    let entities = to_json("content_analysis", &a.entities)?;
    conn.execute(
        "INSERT INTO content_analysis (
            article_id, sentiment_score, importance_score, readability_score,
            keywords, entities, topic, language, processed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(article_id) DO UPDATE SET
            sentiment_score = excluded.sentiment_score,
            importance_score = excluded.importance_score,
            readability_score = excluded.readability_score,
            keywords = excluded.keywords,
            entities = excluded.entities,
            topic = excluded.topic,
            language = excluded.language,
            processed_at = excluded.processed_at",
        params![
            a.article_id,
            a.sentiment_score,
            a.importance_score,
            a.readability_score,
            keywords,
            entities,
            a.topic,
            a.language,
            fmt_ts(&a.processed_at),
        ],
    )
    .map_err(|e| to_store_err(format!("upsert_analysis: {e}")))?;
    Ok(())
}

// --- Social metrics ---

pub fn get_social(conn: &Connection, url: &str) -> RankResult<Option<SocialMetrics>> {
    conn.query_row(
        "SELECT url, twitter_shares, facebook_shares, linkedin_shares, reddit_score,
                total_shares, social_mentions, sentiment, last_fetched
         FROM social_metrics WHERE url = ?1",
        params![url],
        |row| {
            let sentiment: String = row.get(7)?;
            let last_fetched: String = row.get(8)?;
            Ok(SocialMetrics {
                url: row.get(0)?,
                twitter_shares: from_sql_count(row.get(1)?),
                facebook_shares: from_sql_count(row.get(2)?),
                linkedin_shares: from_sql_count(row.get(3)?),
                reddit_score: from_sql_count(row.get(4)?),
                total_shares: from_sql_count(row.get(5)?),
                social_mentions: from_sql_count(row.get(6)?),
                sentiment_by_platform: from_json::<BTreeMap<String, f64>>(&sentiment)?,
                last_fetched: parse_ts(&last_fetched)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_store_err(format!("get_social: {e}")))
}

pub fn upsert_social(conn: &Connection, m: &SocialMetrics) -> RankResult<()> {
    let sentiment = to_json("social_metrics", &m.sentiment_by_platform)?;
    conn.execute(
        "INSERT INTO social_metrics (
            url, twitter_shares, facebook_shares, linkedin_shares, reddit_score,
            total_shares, social_mentions, sentiment, last_fetched
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(url) DO UPDATE SET
            twitter_shares = excluded.twitter_shares,
            facebook_shares = excluded.facebook_shares,
            linkedin_shares = excluded.linkedin_shares,
            reddit_score = excluded.reddit_score,
            total_shares = excluded.total_shares,
            social_mentions = excluded.social_mentions,
            sentiment = excluded.sentiment,
            last_fetched = excluded.last_fetched",
        params![
            m.url,
            to_sql_count(m.twitter_shares),
            to_sql_count(m.facebook_shares),
            to_sql_count(m.linkedin_shares),
            to_sql_count(m.reddit_score),
            to_sql_count(m.total_shares),
            to_sql_count(m.social_mentions),
            sentiment,
            fmt_ts(&m.last_fetched),
        ],
    )
    .map_err(|e| to_store_err(format!("upsert_social: {e}")))?;
    Ok(())
}
