//! # newsrank-analysis
//!
//! Collaborators that run without network access:
//! - [`HeuristicAnalyzer`]: word-list sentiment, importance, Flesch readability,
//!   keywords, regex entities, topic, and language.
//! - [`SimulatedSocialClient`]: stable per-URL share counts derived from a hash.

pub mod analyzer;
pub mod social;

pub use analyzer::HeuristicAnalyzer;
pub use social::SimulatedSocialClient;
