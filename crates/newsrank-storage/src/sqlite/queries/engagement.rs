//! engagement_metrics: lookups and atomic in-place increments.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use newsrank_core::errors::RankResult;
use newsrank_core::models::{EngagementMetrics, EngagementUpdate};

use super::{fmt_ts, from_sql_count, parse_ts, to_sql_count};
use crate::to_store_err;

pub fn get_engagement(conn: &Connection, article_id: &str) -> RankResult<Option<EngagementMetrics>> {
    conn.query_row(
        "SELECT article_id, view_count, click_count, share_count,
                average_read_time, bounce_rate, last_updated
         FROM engagement_metrics WHERE article_id = ?1",
        params![article_id],
        |row| {
            let last_updated: String = row.get(6)?;
            Ok(EngagementMetrics {
                article_id: row.get(0)?,
                view_count: from_sql_count(row.get(1)?),
                click_count: from_sql_count(row.get(2)?),
                share_count: from_sql_count(row.get(3)?),
                average_read_time: row.get(4)?,
                bounce_rate: row.get(5)?,
                last_updated: parse_ts(&last_updated)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_store_err(format!("get_engagement: {e}")))
}

/// Apply one update inside a transaction. The arithmetic happens in SQL
/// (`count = count + ?`), never as read-modify-write in Rust.
pub fn record_engagement(
    conn: &Connection,
    article_id: &str,
    update: EngagementUpdate,
    now: DateTime<Utc>,
) -> RankResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("record_engagement begin: {e}")))?;

    let ts = fmt_ts(&now);
    tx.execute(
        "INSERT INTO engagement_metrics (article_id, last_updated) VALUES (?1, ?2)
         ON CONFLICT(article_id) DO NOTHING",
        params![article_id, ts],
    )
    .map_err(|e| to_store_err(format!("record_engagement insert: {e}")))?;

    let result = match update {
        EngagementUpdate::View(n) => tx.execute(
            "UPDATE engagement_metrics SET view_count = view_count + ?2, last_updated = ?3
             WHERE article_id = ?1",
            params![article_id, to_sql_count(n), ts],
        ),
        EngagementUpdate::Click(n) => tx.execute(
            "UPDATE engagement_metrics SET click_count = click_count + ?2, last_updated = ?3
             WHERE article_id = ?1",
            params![article_id, to_sql_count(n), ts],
        ),
        EngagementUpdate::Share(n) => tx.execute(
            "UPDATE engagement_metrics SET share_count = share_count + ?2, last_updated = ?3
             WHERE article_id = ?1",
            params![article_id, to_sql_count(n), ts],
        ),
        EngagementUpdate::ReadTime(secs) => tx.execute(
            "UPDATE engagement_metrics
             SET average_read_time = (average_read_time + ?2) / 2.0, last_updated = ?3
             WHERE article_id = ?1",
            params![article_id, secs as f64, ts],
        ),
        EngagementUpdate::BounceRate(rate) => tx.execute(
            "UPDATE engagement_metrics SET bounce_rate = ?2, last_updated = ?3
             WHERE article_id = ?1",
            params![article_id, rate, ts],
        ),
    };
    result.map_err(|e| to_store_err(format!("record_engagement {}: {e}", update.kind())))?;

    tx.commit()
        .map_err(|e| to_store_err(format!("record_engagement commit: {e}")))?;
    Ok(())
}
