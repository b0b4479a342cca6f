//! SQL for each persisted entity, plus the column codecs they share.

pub mod articles;
pub mod engagement;
pub mod metrics;
pub mod scores;

use chrono::{DateTime, SecondsFormat, Utc};
use newsrank_core::errors::{RankError, RankResult, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) fn fmt_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn parse_ts(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Counters are `u64` in the model and `INTEGER` (i64) in SQLite.
pub(crate) fn to_sql_count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

pub(crate) fn from_sql_count(n: i64) -> u64 {
    n.max(0) as u64
}

pub(crate) fn to_json<T: Serialize>(entity: &str, value: &T) -> RankResult<String> {
    serde_json::to_string(value).map_err(|e| {
        RankError::Store(StoreError::Serialization {
            entity: entity.to_string(),
            reason: e.to_string(),
        })
    })
}

pub(crate) fn from_json<T: DeserializeOwned>(raw: &str) -> rusqlite::Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
