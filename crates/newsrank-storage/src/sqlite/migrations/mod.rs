//! Schema migrations using PRAGMA user_version.

pub mod v001_initial;

use newsrank_core::errors::{RankResult, StoreError};
use rusqlite::Connection;

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> RankResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[(v001_initial::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StoreError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StoreError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Current schema version of the database.
pub fn current_version(conn: &Connection) -> RankResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StoreError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
