//! # newsrank-scoring
//!
//! Turns one article into an [`ArticleScore`](newsrank_core::ArticleScore):
//! four independent metric sources (engagement, credibility, content, social),
//! a pure recency decay, and a weighted aggregator that normalizes by the weight sum.

pub mod aggregator;
pub mod recency;
pub mod sources;

pub use aggregator::{ScoreAggregator, ScoreOutcome};
pub use sources::{ContentSource, CredibilitySource, EngagementSource, SocialSource};
