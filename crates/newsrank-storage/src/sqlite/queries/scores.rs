//! article_scores: upsert, point lookup, and the top-N index scan.

use rusqlite::{params, Connection, OptionalExtension, Row};

use newsrank_core::errors::RankResult;
use newsrank_core::models::{ArticleScore, Signal};

use super::{fmt_ts, from_json, parse_ts, to_json};
use crate::to_store_err;

pub fn upsert_score(conn: &Connection, score: &ArticleScore) -> RankResult<()> {
    let fallbacks = to_json("article_score", &score.fallbacks)?;
    conn.execute(
        "INSERT INTO article_scores (
            article_id, engagement_score, credibility_score, content_score,
            social_score, recency_score, final_score, fallbacks, last_updated
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(article_id) DO UPDATE SET
            engagement_score = excluded.engagement_score,
            credibility_score = excluded.credibility_score,
            content_score = excluded.content_score,
            social_score = excluded.social_score,
            recency_score = excluded.recency_score,
            final_score = excluded.final_score,
            fallbacks = excluded.fallbacks,
            last_updated = excluded.last_updated",
        params![
            score.article_id,
            score.engagement_score,
            score.credibility_score,
            score.content_score,
            score.social_score,
            score.recency_score,
            score.final_score,
            fallbacks,
            fmt_ts(&score.last_updated),
        ],
    )
    .map_err(|e| to_store_err(format!("upsert_score: {e}")))?;
    Ok(())
}

pub fn get_score(conn: &Connection, article_id: &str) -> RankResult<Option<ArticleScore>> {
    conn.query_row(
        "SELECT article_id, engagement_score, credibility_score, content_score,
                social_score, recency_score, final_score, fallbacks, last_updated
         FROM article_scores WHERE article_id = ?1",
        params![article_id],
        row_to_score,
    )
    .optional()
    .map_err(|e| to_store_err(format!("get_score: {e}")))
}

/// Ids with `final_score >= min_score`, best first, ties by id.
pub fn top_scored(conn: &Connection, limit: usize, min_score: f64) -> RankResult<Vec<String>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare_cached(
            "SELECT article_id FROM article_scores
             WHERE final_score >= ?1
             ORDER BY final_score DESC, article_id ASC
             LIMIT ?2",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![min_score, limit], |row| row.get::<_, String>(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(format!("top_scored: {e}")))
}

fn row_to_score(row: &Row<'_>) -> rusqlite::Result<ArticleScore> {
    let fallbacks: String = row.get(7)?;
    let last_updated: String = row.get(8)?;
    Ok(ArticleScore {
        article_id: row.get(0)?,
        engagement_score: row.get(1)?,
        credibility_score: row.get(2)?,
        content_score: row.get(3)?,
        social_score: row.get(4)?,
        recency_score: row.get(5)?,
        final_score: row.get(6)?,
        fallbacks: from_json::<Vec<Signal>>(&fallbacks)?,
        last_updated: parse_ts(&last_updated)?,
    })
}
