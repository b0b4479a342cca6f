//! # newsrank-ranking
//!
//! Top-stories selection on top of the scoring crate: category normalization,
//! the category balancer, and [`TopStoriesEngine`], which owns the
//! CalculateTopStories / RefreshScores / TrackEngagement entry points.

pub mod balancer;
pub mod category;
pub mod engine;

pub use balancer::{Balanced, CategoryBalancer};
pub use category::{normalize_category, Categorized};
pub use engine::{RankedArticle, RefreshReport, ScoringFailure, TopStoriesEngine};
