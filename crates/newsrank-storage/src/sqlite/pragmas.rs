//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 64MB cache, 5s busy_timeout.

use rusqlite::Connection;

use newsrank_core::errors::RankResult;

use crate::to_store_err;

/// Apply performance and safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> RankResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -64000;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// Whether WAL journaling is active. In-memory databases report `memory`.
pub fn is_wal_mode(conn: &Connection) -> RankResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
