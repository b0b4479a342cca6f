use std::sync::Arc;

use async_trait::async_trait;
use newsrank_core::errors::RankResult;
use newsrank_core::models::{Article, Signal, SourceCredibility};
use newsrank_core::traits::{MetricSource, ScoreStore};
use newsrank_core::ScoringContext;

/// Score for outlets with no stored or built-in rating.
pub const DEFAULT_CREDIBILITY: f64 = 0.6;

/// Built-in ratings used when the store has no record for an outlet.
const KNOWN_OUTLETS: &[(&str, f64)] = &[
    ("BBC News", 0.9),
    ("Reuters", 0.9),
    ("Associated Press", 0.9),
    ("NPR", 0.85),
    ("The Guardian", 0.8),
    ("CNN", 0.75),
    ("TechCrunch", 0.7),
    ("NDTV", 0.75),
    ("Times of India", 0.7),
    ("The Hindu", 0.8),
];

/// Source-trust sub-score.
pub struct CredibilitySource {
    store: Arc<dyn ScoreStore>,
}

impl CredibilitySource {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetricSource for CredibilitySource {
    fn signal(&self) -> Signal {
        Signal::Credibility
    }

    async fn score(&self, _ctx: &ScoringContext, article: &Article) -> RankResult<f64> {
        Ok(match self.store.get_source_credibility(&article.source).await? {
            Some(credibility) => combine_credibility(&credibility),
            None => known_outlet_score(&article.source),
        })
    }

    fn fallback(&self, article: &Article) -> f64 {
        known_outlet_score(&article.source)
    }
}

/// `0.4·credibility + 0.3·reliability + 0.3·factual`. Bias is not scored.
pub fn combine_credibility(c: &SourceCredibility) -> f64 {
    (c.credibility_score * 0.4 + c.reliability_score * 0.3 + c.factual_score * 0.3).clamp(0.0, 1.0)
}

/// Built-in rating for a known outlet (case-insensitive), else [`DEFAULT_CREDIBILITY`].
pub fn known_outlet_score(source: &str) -> f64 {
    let source = source.trim();
    KNOWN_OUTLETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(source))
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_CREDIBILITY)
}
