use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{RankError, RankResult};

/// Reader interaction counters for one article.
///
/// Counters only ever grow. Mutated by tracking calls, read-only during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub article_id: String,
    pub view_count: u64,
    pub click_count: u64,
    pub share_count: u64,
    /// Seconds; folded as a running average on every `read_time` event.
    pub average_read_time: f64,
    /// [0.0, 1.0]
    pub bounce_rate: f64,
    pub last_updated: DateTime<Utc>,
}

impl EngagementMetrics {
    pub fn new(article_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            article_id: article_id.into(),
            view_count: 0,
            click_count: 0,
            share_count: 0,
            average_read_time: 0.0,
            bounce_rate: 0.0,
            last_updated: now,
        }
    }

    /// False when nothing has been recorded besides a bounce rate.
    pub fn has_activity(&self) -> bool {
        self.view_count > 0
            || self.click_count > 0
            || self.share_count > 0
            || self.average_read_time > 0.0
    }

    /// Fold one update into the record.
    ///
    /// Stores call this while holding the per-article lock (or inside a single
    /// SQL statement), which keeps increments atomic across concurrent trackers.
    pub fn apply(&mut self, update: EngagementUpdate, now: DateTime<Utc>) {
        match update {
            EngagementUpdate::View(n) => self.view_count = self.view_count.saturating_add(n),
            EngagementUpdate::Click(n) => self.click_count = self.click_count.saturating_add(n),
            EngagementUpdate::Share(n) => self.share_count = self.share_count.saturating_add(n),
            EngagementUpdate::ReadTime(secs) => {
                self.average_read_time = (self.average_read_time + secs as f64) / 2.0;
            }
            EngagementUpdate::BounceRate(rate) => self.bounce_rate = rate,
        }
        self.last_updated = now;
    }
}

/// Kinds of engagement a client can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementKind {
    View,
    Click,
    Share,
    ReadTime,
    BounceRate,
}

impl EngagementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementKind::View => "view",
            EngagementKind::Click => "click",
            EngagementKind::Share => "share",
            EngagementKind::ReadTime => "read_time",
            EngagementKind::BounceRate => "bounce_rate",
        }
    }
}

impl fmt::Display for EngagementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngagementKind {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(EngagementKind::View),
            "click" => Ok(EngagementKind::Click),
            "share" => Ok(EngagementKind::Share),
            "read_time" => Ok(EngagementKind::ReadTime),
            "bounce_rate" => Ok(EngagementKind::BounceRate),
            other => Err(RankError::UnknownEngagementKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A validated engagement event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngagementUpdate {
    View(u64),
    Click(u64),
    Share(u64),
    /// Seconds spent reading.
    ReadTime(u64),
    BounceRate(f64),
}

impl EngagementUpdate {
    /// Validate a raw `(kind, value)` pair from a tracking call.
    pub fn parse(kind: &str, value: f64) -> RankResult<Self> {
        let kind: EngagementKind = kind.parse()?;
        let invalid = |reason: &str| RankError::InvalidEngagementValue {
            kind: kind.to_string(),
            value,
            reason: reason.to_string(),
        };

        let whole = || {
            if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
                return Err(invalid("must be a non-negative whole number"));
            }
            Ok(value as u64)
        };

        Ok(match kind {
            EngagementKind::View => EngagementUpdate::View(whole()?),
            EngagementKind::Click => EngagementUpdate::Click(whole()?),
            EngagementKind::Share => EngagementUpdate::Share(whole()?),
            EngagementKind::ReadTime => EngagementUpdate::ReadTime(whole()?),
            EngagementKind::BounceRate => {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(invalid("bounce rate must be within [0, 1]"));
                }
                EngagementUpdate::BounceRate(value)
            }
        })
    }

    pub fn kind(&self) -> EngagementKind {
        match self {
            EngagementUpdate::View(_) => EngagementKind::View,
            EngagementUpdate::Click(_) => EngagementKind::Click,
            EngagementUpdate::Share(_) => EngagementKind::Share,
            EngagementUpdate::ReadTime(_) => EngagementKind::ReadTime,
            EngagementUpdate::BounceRate(_) => EngagementKind::BounceRate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_time_is_a_running_average() {
        let now = Utc::now();
        let mut m = EngagementMetrics::new("a", now);
        m.apply(EngagementUpdate::ReadTime(100), now);
        assert_eq!(m.average_read_time, 50.0);
        m.apply(EngagementUpdate::ReadTime(150), now);
        assert_eq!(m.average_read_time, 100.0);
    }

    #[test]
    fn counters_saturate_instead_of_wrapping() {
        let now = Utc::now();
        let mut m = EngagementMetrics::new("a", now);
        m.view_count = u64::MAX - 1;
        m.apply(EngagementUpdate::View(10), now);
        assert_eq!(m.view_count, u64::MAX);
    }
}
