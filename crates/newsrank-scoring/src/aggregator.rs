//! ScoreAggregator: runs the metric sources concurrently, adds recency, and
//! combines everything into one weighted score.
//!
//! ```text
//! final = Σ signal·weight / Σ weight
//! ```
//!
//! Each source call carries its own timeout. A failing, slow, or non-finite
//! source is replaced by its fallback value and reported as a degradation;
//! only cancellation and invalid input fail the call.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use newsrank_core::config::{ScoringWeights, TopStoriesConfig};
use newsrank_core::errors::{CollaboratorError, RankError, RankResult};
use newsrank_core::models::{Article, ArticleScore, DegradationEvent, Signal};
use newsrank_core::traits::{
    ContentAnalyzer, MetricSource, ScoreStore, SocialMetricsClient,
};
use newsrank_core::ScoringContext;
use newsrank_observability::tracing_setup::events;
use tracing::Instrument;

use crate::recency;
use crate::sources::{ContentSource, CredibilitySource, EngagementSource, SocialSource};

/// Score plus the degradations that occurred while computing it.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub score: ArticleScore,
    pub degradations: Vec<DegradationEvent>,
}

struct SignalValue {
    signal: Signal,
    value: f64,
    failure: Option<String>,
}

/// Combines per-signal sub-scores into a final article score.
pub struct ScoreAggregator {
    sources: Vec<Arc<dyn MetricSource>>,
    store: Arc<dyn ScoreStore>,
    weights: ScoringWeights,
    max_age: chrono::Duration,
    source_timeout: Duration,
}

impl ScoreAggregator {
    /// Build an aggregator over arbitrary sources.
    ///
    /// Rejects invalid weights, duplicate signals, sources claiming the recency
    /// signal (recency is computed here), and configurations where every
    /// participating signal has zero weight.
    pub fn new(
        store: Arc<dyn ScoreStore>,
        sources: Vec<Arc<dyn MetricSource>>,
        config: &TopStoriesConfig,
    ) -> RankResult<Self> {
        config.validate()?;

        let mut seen = HashSet::new();
        for source in &sources {
            let signal = source.signal();
            if signal == Signal::Recency {
                return Err(RankError::InvalidConfig {
                    field: "sources".into(),
                    reason: "recency is computed by the aggregator".into(),
                });
            }
            if !seen.insert(signal) {
                return Err(RankError::InvalidConfig {
                    field: "sources".into(),
                    reason: format!("duplicate source for signal {signal}"),
                });
            }
        }

        let participating: f64 = seen
            .iter()
            .chain(std::iter::once(&Signal::Recency))
            .map(|s| config.weights.weight_for(*s))
            .sum();
        if participating <= 0.0 {
            return Err(RankError::InvalidConfig {
                field: "weights".into(),
                reason: "every configured signal has zero weight".into(),
            });
        }

        Ok(Self {
            sources,
            store,
            weights: config.weights.clone(),
            max_age: config.max_age(),
            source_timeout: config.collaborator_timeout(),
        })
    }

    /// Aggregator wired with the four standard sources.
    pub fn standard(
        store: Arc<dyn ScoreStore>,
        analyzer: Arc<dyn ContentAnalyzer>,
        social: Arc<dyn SocialMetricsClient>,
        config: &TopStoriesConfig,
    ) -> RankResult<Self> {
        let sources: Vec<Arc<dyn MetricSource>> = vec![
            Arc::new(EngagementSource::new(store.clone())),
            Arc::new(CredibilitySource::new(store.clone())),
            Arc::new(ContentSource::new(store.clone(), analyzer)),
            Arc::new(SocialSource::new(store.clone(), social)),
        ];
        Self::new(store, sources, config)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one article and persist the result.
    pub async fn score(&self, ctx: &ScoringContext, article: &Article) -> RankResult<ArticleScore> {
        self.score_detailed(ctx, article).await.map(|o| o.score)
    }

    /// Score one article, returning the degradations alongside the score.
    pub async fn score_detailed(
        &self,
        ctx: &ScoringContext,
        article: &Article,
    ) -> RankResult<ScoreOutcome> {
        if article.id.trim().is_empty() {
            return Err(RankError::Validation {
                reason: "article id must not be empty".into(),
            });
        }
        if ctx.is_cancelled() {
            return Err(RankError::Cancelled);
        }

        let span = newsrank_observability::scoring_span!(article.id);
        let evaluations = self
            .sources
            .iter()
            .map(|source| self.evaluate(source.as_ref(), ctx, article));

        let values = tokio::select! {
            biased;
            _ = ctx.cancelled() => return Err(RankError::Cancelled),
            values = join_all(evaluations).instrument(span) => values,
        };

        let recency = recency::score(article.published_at, ctx.now, self.max_age);

        let mut score = ArticleScore {
            article_id: article.id.clone(),
            engagement_score: 0.0,
            credibility_score: 0.0,
            content_score: 0.0,
            social_score: 0.0,
            recency_score: recency,
            final_score: 0.0,
            fallbacks: Vec::new(),
            last_updated: ctx.now,
        };
        let mut degradations = Vec::new();
        let mut weighted = vec![(Signal::Recency, recency)];

        for v in values {
            match v.signal {
                Signal::Engagement => score.engagement_score = v.value,
                Signal::Credibility => score.credibility_score = v.value,
                Signal::Content => score.content_score = v.value,
                Signal::Social => score.social_score = v.value,
                Signal::Recency => {}
            }
            if let Some(failure) = v.failure {
                score.fallbacks.push(v.signal);
                degradations.push(DegradationEvent {
                    signal: v.signal,
                    article_id: article.id.clone(),
                    failure,
                    fallback_score: v.value,
                    timestamp: ctx.now,
                });
            }
            weighted.push((v.signal, v.value));
        }
        score.fallbacks.sort();
        score.final_score = combine(&self.weights, &weighted);

        if let Err(e) = self.store.upsert_article_score(&score).await {
            events::persist_failed("article_score", &article.id, &e.to_string());
        }

        Ok(ScoreOutcome {
            score,
            degradations,
        })
    }

    async fn evaluate(
        &self,
        source: &dyn MetricSource,
        ctx: &ScoringContext,
        article: &Article,
    ) -> SignalValue {
        let signal = source.signal();
        let failure = match tokio::time::timeout(self.source_timeout, source.score(ctx, article))
            .await
        {
            Ok(Ok(value)) if value.is_finite() => {
                return SignalValue {
                    signal,
                    value: value.clamp(0.0, 1.0),
                    failure: None,
                };
            }
            Ok(Ok(value)) => format!("non-finite sub-score {value}"),
            Ok(Err(e)) => e.to_string(),
            Err(_) => CollaboratorError::Timeout {
                collaborator: signal.to_string(),
                timeout_ms: self.source_timeout.as_millis() as u64,
            }
            .to_string(),
        };

        let value = source.fallback(article).clamp(0.0, 1.0);
        events::signal_fallback(signal, &article.id, &failure, value);
        SignalValue {
            signal,
            value,
            failure: Some(failure),
        }
    }
}

/// Weighted mean of the given signal values, normalized by the weight sum.
///
/// Returns 0.0 when the participating weights sum to zero. The result is
/// clamped to `[0, 1]` against floating-point drift.
pub fn combine(weights: &ScoringWeights, values: &[(Signal, f64)]) -> f64 {
    let (sum, total) = values
        .iter()
        .fold((0.0, 0.0), |(sum, total), (signal, value)| {
            let w = weights.weight_for(*signal);
            (sum + value * w, total + w)
        });
    if total <= 0.0 {
        return 0.0;
    }
    (sum / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_matches_weighted_mean() {
        let weights = ScoringWeights {
            engagement: 1.0,
            credibility: 1.0,
            content: 0.0,
            social: 0.0,
            recency: 2.0,
        };
        let values = [
            (Signal::Engagement, 0.5),
            (Signal::Credibility, 1.0),
            (Signal::Content, 0.9),
            (Signal::Social, 0.1),
            (Signal::Recency, 0.25),
        ];
        // (0.5 + 1.0 + 0.5) / 4
        assert!((combine(&weights, &values) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scaling_weights_does_not_change_result() {
        let a = ScoringWeights::default();
        let b = ScoringWeights {
            engagement: a.engagement * 40.0,
            credibility: a.credibility * 40.0,
            content: a.content * 40.0,
            social: a.social * 40.0,
            recency: a.recency * 40.0,
        };
        let values = [
            (Signal::Engagement, 0.3),
            (Signal::Credibility, 0.8),
            (Signal::Content, 0.6),
            (Signal::Social, 0.2),
            (Signal::Recency, 0.95),
        ];
        assert!((combine(&a, &values) - combine(&b, &values)).abs() < 1e-12);
    }
}
