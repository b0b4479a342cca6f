use async_trait::async_trait;

use crate::context::ScoringContext;
use crate::errors::RankResult;
use crate::models::{Article, Signal};

/// One normalized ranking signal for an article.
///
/// Implementations return `Err` when their collaborator fails; the aggregator
/// then substitutes `fallback`. Adding a signal means adding an implementation,
/// not touching the aggregator's combination logic.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Which signal this source produces.
    fn signal(&self) -> Signal;

    /// Compute the sub-score in [0.0, 1.0].
    async fn score(&self, ctx: &ScoringContext, article: &Article) -> RankResult<f64>;

    /// Value used when `score` fails or times out.
    fn fallback(&self, article: &Article) -> f64;
}
