//! # newsrank-core
//!
//! Foundation crate for the newsrank ranking engine.
//! Defines the article and metric models, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CategoryBalanceConfig, NewsRankConfig, ScoringWeights, TopStoriesConfig};
pub use context::ScoringContext;
pub use errors::{RankError, RankResult};
pub use models::{
    Article, ArticleScore, ContentAnalysis, EngagementKind, EngagementMetrics, EngagementUpdate,
    Signal, SocialMetrics, SourceCredibility,
};
