//! articles: candidate retrieval for ranking.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use newsrank_core::errors::RankResult;
use newsrank_core::models::Article;

use super::{fmt_ts, parse_ts};
use crate::to_store_err;

const ARTICLE_COLUMNS: &str =
    "id, title, content, summary, url, source, category, image_url, published_at";

pub fn upsert_article(conn: &Connection, a: &Article) -> RankResult<()> {
    conn.execute(
        "INSERT INTO articles (
            id, title, content, summary, url, source, category, image_url, published_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            content = excluded.content,
            summary = excluded.summary,
            url = excluded.url,
            source = excluded.source,
            category = excluded.category,
            image_url = excluded.image_url,
            published_at = excluded.published_at",
        params![
            a.id,
            a.title,
            a.content,
            a.summary,
            a.url,
            a.source,
            a.category,
            a.image_url,
            fmt_ts(&a.published_at),
        ],
    )
    .map_err(|e| to_store_err(format!("upsert_article: {e}")))?;
    Ok(())
}

/// Articles published in `[start, end]`, newest first.
pub fn articles_between(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> RankResult<Vec<Article>> {
    let sql = format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles
         WHERE published_at >= ?1 AND published_at <= ?2
         ORDER BY published_at DESC, id ASC"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![fmt_ts(&start), fmt_ts(&end)], row_to_article)
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(format!("articles_between: {e}")))
}

/// Articles for `ids`, in the order given. Unknown ids are skipped.
pub fn articles_by_ids(conn: &Connection, ids: &[String]) -> RankResult<Vec<Article>> {
    let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?1");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_store_err(e.to_string()))?;
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        let article = stmt
            .query_row(params![id], row_to_article)
            .optional()
            .map_err(|e| to_store_err(format!("articles_by_ids: {e}")))?;
        found.extend(article);
    }
    Ok(found)
}

fn row_to_article(row: &Row<'_>) -> rusqlite::Result<Article> {
    let published_at: String = row.get(8)?;
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        summary: row.get(3)?,
        url: row.get(4)?,
        source: row.get(5)?,
        category: row.get(6)?,
        image_url: row.get(7)?,
        published_at: parse_ts(&published_at)?,
    })
}
