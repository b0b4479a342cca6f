use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{RankError, RankResult};
use crate::models::Signal;

/// Weights for the five ranking signals.
///
/// The weights need not sum to 1; the aggregator divides by their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub engagement: f64,
    pub credibility: f64,
    pub content: f64,
    pub social: f64,
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement: defaults::DEFAULT_ENGAGEMENT_WEIGHT,
            credibility: defaults::DEFAULT_CREDIBILITY_WEIGHT,
            content: defaults::DEFAULT_CONTENT_WEIGHT,
            social: defaults::DEFAULT_SOCIAL_WEIGHT,
            recency: defaults::DEFAULT_RECENCY_WEIGHT,
        }
    }
}

impl ScoringWeights {
    /// Weight configured for one signal.
    pub fn weight_for(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Engagement => self.engagement,
            Signal::Credibility => self.credibility,
            Signal::Content => self.content,
            Signal::Social => self.social,
            Signal::Recency => self.recency,
        }
    }

    /// Sum of all five weights.
    pub fn total(&self) -> f64 {
        Signal::ALL.iter().map(|s| self.weight_for(*s)).sum()
    }

    pub fn validate(&self) -> RankResult<()> {
        for signal in Signal::ALL {
            let w = self.weight_for(signal);
            if !w.is_finite() || w < 0.0 {
                return Err(RankError::InvalidConfig {
                    field: format!("weights.{}", signal.as_str()),
                    reason: format!("must be a finite non-negative number, got {w}"),
                });
            }
        }
        if self.total() <= 0.0 {
            return Err(RankError::InvalidConfig {
                field: "weights".into(),
                reason: "at least one weight must be positive".into(),
            });
        }
        Ok(())
    }
}

/// Category diversity rules applied by the balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryBalanceConfig {
    /// Primary-pass cap on articles per normalized category.
    pub max_per_category: usize,
    /// Minimum number of distinct categories in the output (diversity floor).
    pub min_categories: usize,
    /// Categories the diversity pass adds when they are missing.
    pub required_categories: Vec<String>,
    /// Per-category multipliers applied to the ordering key before balancing.
    pub category_multipliers: HashMap<String, f64>,
}

impl Default for CategoryBalanceConfig {
    fn default() -> Self {
        Self {
            max_per_category: defaults::DEFAULT_MAX_PER_CATEGORY,
            min_categories: defaults::DEFAULT_MIN_CATEGORIES,
            required_categories: Vec::new(),
            category_multipliers: HashMap::new(),
        }
    }
}

impl CategoryBalanceConfig {
    pub fn validate(&self) -> RankResult<()> {
        if self.max_per_category == 0 {
            return Err(RankError::InvalidConfig {
                field: "balance.max_per_category".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.min_categories == 0 {
            return Err(RankError::InvalidConfig {
                field: "balance.min_categories".into(),
                reason: "must be at least 1".into(),
            });
        }
        for (category, multiplier) in &self.category_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(RankError::InvalidConfig {
                    field: format!("balance.category_multipliers.{category}"),
                    reason: format!("must be a finite positive number, got {multiplier}"),
                });
            }
        }
        Ok(())
    }
}

/// Configuration of the top-stories pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopStoriesConfig {
    pub weights: ScoringWeights,
    pub balance: CategoryBalanceConfig,
    /// Articles whose final score falls below this are excluded.
    pub min_score: f64,
    /// Candidate window; also the age at which recency reaches zero.
    pub max_age_hours: u64,
    /// Requested limits above this are clamped.
    pub max_limit: usize,
    /// Worker pool size for concurrent article scoring.
    pub max_concurrency: usize,
    /// Timeout for each sub-scorer call (milliseconds).
    pub collaborator_timeout_ms: u64,
    /// Interval the host should use for scheduling score refreshes (seconds).
    pub refresh_interval_secs: u64,
}

impl Default for TopStoriesConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            balance: CategoryBalanceConfig::default(),
            min_score: defaults::DEFAULT_MIN_SCORE,
            max_age_hours: defaults::DEFAULT_MAX_AGE_HOURS,
            max_limit: defaults::DEFAULT_MAX_LIMIT,
            max_concurrency: defaults::DEFAULT_MAX_CONCURRENCY,
            collaborator_timeout_ms: defaults::DEFAULT_COLLABORATOR_TIMEOUT_MS,
            refresh_interval_secs: defaults::DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl TopStoriesConfig {
    /// Candidate window. Hours beyond [`defaults::MAX_AGE_HOURS_LIMIT`] are
    /// clamped; `validate()` rejects them.
    pub fn max_age(&self) -> chrono::Duration {
        let hours = self.max_age_hours.min(defaults::MAX_AGE_HOURS_LIMIT);
        i64::try_from(hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .unwrap_or_default()
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn validate(&self) -> RankResult<()> {
        self.weights.validate()?;
        self.balance.validate()?;
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(RankError::InvalidConfig {
                field: "top_stories.min_score".into(),
                reason: format!("must be within [0, 1], got {}", self.min_score),
            });
        }
        if self.max_age_hours == 0 {
            return Err(RankError::InvalidConfig {
                field: "top_stories.max_age_hours".into(),
                reason: "must be positive".into(),
            });
        }
        if self.max_age_hours > defaults::MAX_AGE_HOURS_LIMIT {
            return Err(RankError::InvalidConfig {
                field: "top_stories.max_age_hours".into(),
                reason: format!(
                    "must be at most {}, got {}",
                    defaults::MAX_AGE_HOURS_LIMIT,
                    self.max_age_hours
                ),
            });
        }
        if self.max_concurrency == 0 {
            return Err(RankError::InvalidConfig {
                field: "top_stories.max_concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.collaborator_timeout_ms == 0 {
            return Err(RankError::InvalidConfig {
                field: "top_stories.collaborator_timeout_ms".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}
