pub mod defaults;
mod observability_config;
mod storage_config;
mod top_stories_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use storage_config::{StorageBackend, StorageConfig};
pub use top_stories_config::{CategoryBalanceConfig, ScoringWeights, TopStoriesConfig};

use crate::errors::{RankError, RankResult};

/// Root configuration, loaded once at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsRankConfig {
    pub top_stories: TopStoriesConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl NewsRankConfig {
    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml(input: &str) -> RankResult<Self> {
        let config: NewsRankConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> RankResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RankError::ConfigParse(format!("reading {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    pub fn validate(&self) -> RankResult<()> {
        self.top_stories.validate()
    }
}
