//! TopStoriesEngine: candidate window → concurrent scoring → min-score filter
//! → ordering → category balancing.
//!
//! Scoring runs on a bounded worker pool (`max_concurrency` permits). Results
//! are collected in full before ordering, so the ranking never depends on
//! completion order. Cancellation aborts the whole batch; a single article
//! whose scoring fails outright is dropped and counted.

use std::collections::BTreeSet;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use futures::FutureExt;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::Instrument;

use newsrank_core::config::TopStoriesConfig;
use newsrank_core::errors::{RankError, RankResult};
use newsrank_core::models::{Article, ArticleScore, EngagementUpdate, Signal};
use newsrank_core::traits::{ArticleSource, ContentAnalyzer, ScoreStore, SocialMetricsClient};
use newsrank_core::ScoringContext;
use newsrank_observability::tracing_setup::events;
use newsrank_observability::{DegradationSnapshot, DegradationTracker};
use newsrank_scoring::{ScoreAggregator, ScoreOutcome};

use crate::balancer::CategoryBalancer;
use crate::category::Categorized;

/// An article with the score breakdown that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArticle {
    pub article: Article,
    pub score: ArticleScore,
}

impl Categorized for RankedArticle {
    fn category(&self) -> &str {
        &self.article.category
    }
}

/// An article whose scoring failed outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringFailure {
    pub article_id: String,
    pub reason: String,
}

/// Outcome of a score refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<ScoringFailure>,
}

struct BatchOutcome {
    /// Scored articles in candidate order.
    scored: Vec<(Article, ScoreOutcome)>,
    failures: Vec<ScoringFailure>,
}

type TaskOutput = (usize, Article, RankResult<ScoreOutcome>);

/// Ranking entry points: top stories, score refresh, engagement tracking.
pub struct TopStoriesEngine {
    aggregator: Arc<ScoreAggregator>,
    articles: Arc<dyn ArticleSource>,
    store: Arc<dyn ScoreStore>,
    balancer: CategoryBalancer,
    config: TopStoriesConfig,
    degradation: Mutex<DegradationTracker>,
}

impl TopStoriesEngine {
    pub fn new(
        aggregator: ScoreAggregator,
        articles: Arc<dyn ArticleSource>,
        store: Arc<dyn ScoreStore>,
        config: TopStoriesConfig,
    ) -> RankResult<Self> {
        config.validate()?;
        let balancer = CategoryBalancer::new(&config.balance)?;
        Ok(Self {
            aggregator: Arc::new(aggregator),
            articles,
            store,
            balancer,
            config,
            degradation: Mutex::new(DegradationTracker::new()),
        })
    }

    /// Engine wired with the standard four metric sources.
    pub fn standard(
        articles: Arc<dyn ArticleSource>,
        store: Arc<dyn ScoreStore>,
        analyzer: Arc<dyn ContentAnalyzer>,
        social: Arc<dyn SocialMetricsClient>,
        config: TopStoriesConfig,
    ) -> RankResult<Self> {
        let aggregator = ScoreAggregator::standard(store.clone(), analyzer, social, &config)?;
        Self::new(aggregator, articles, store, config)
    }

    pub fn config(&self) -> &TopStoriesConfig {
        &self.config
    }

    /// The top `limit` articles right now, best first and category-balanced.
    pub async fn calculate_top_stories(
        &self,
        ctx: &ScoringContext,
        limit: usize,
    ) -> RankResult<Vec<Article>> {
        Ok(self
            .rank_top_stories(ctx, limit)
            .await?
            .into_iter()
            .map(|r| r.article)
            .collect())
    }

    /// Like [`calculate_top_stories`](Self::calculate_top_stories), keeping
    /// each article's score breakdown.
    pub async fn rank_top_stories(
        &self,
        ctx: &ScoringContext,
        limit: usize,
    ) -> RankResult<Vec<RankedArticle>> {
        let limit = limit.min(self.config.max_limit);
        let span = newsrank_observability::top_stories_span!(limit);
        async move {
            if limit == 0 {
                return Ok(Vec::new());
            }
            let started = Instant::now();

            let candidates = self
                .articles
                .recent_articles(self.config.max_age(), ctx.now)
                .await?;
            let total = candidates.len();
            let batch = self.score_batch(ctx, candidates, "top_stories").await?;
            let scored = batch.scored.len();

            let mut pool: Vec<(f64, RankedArticle)> = batch
                .scored
                .into_iter()
                .filter(|(_, outcome)| outcome.score.final_score >= self.config.min_score)
                .map(|(article, outcome)| {
                    let key = outcome.score.final_score * self.balancer.multiplier(&article.category);
                    (
                        key,
                        RankedArticle {
                            article,
                            score: outcome.score,
                        },
                    )
                })
                .collect();
            // Stable: equal keys keep candidate order.
            pool.sort_by(|a, b| b.0.total_cmp(&a.0));

            let ranked = pool.into_iter().map(|(_, r)| r).collect();
            let balanced = self.balancer.balance(ranked, limit);

            events::top_stories_ranked(total, scored, balanced.items.len(), started.elapsed());
            Ok(balanced.items)
        }
        .instrument(span)
        .await
    }

    /// Recompute and persist scores for every candidate article.
    ///
    /// Individual failures are counted, not propagated. Cancellation and a
    /// failing article source fail the call.
    pub async fn refresh_scores(&self, ctx: &ScoringContext) -> RankResult<RefreshReport> {
        let span = newsrank_observability::refresh_span!();
        async move {
            let started = Instant::now();
            let candidates = self
                .articles
                .recent_articles(self.config.max_age(), ctx.now)
                .await?;
            let total = candidates.len();
            let batch = self.score_batch(ctx, candidates, "refresh").await?;

            let report = RefreshReport {
                total,
                succeeded: batch.scored.len(),
                failed: batch.failures.len(),
                failures: batch.failures,
            };
            events::refresh_completed(
                report.total,
                report.succeeded,
                report.failed,
                started.elapsed(),
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Record one reader interaction.
    ///
    /// `kind` is one of `view`, `click`, `share`, `read_time`, `bounce_rate`.
    pub async fn track_engagement(
        &self,
        ctx: &ScoringContext,
        article_id: &str,
        kind: &str,
        value: f64,
    ) -> RankResult<()> {
        if article_id.trim().is_empty() {
            return Err(RankError::Validation {
                reason: "article id must not be empty".into(),
            });
        }
        let update = EngagementUpdate::parse(kind, value)?;
        if ctx.is_cancelled() {
            return Err(RankError::Cancelled);
        }
        self.store.record_engagement(article_id, update).await?;
        events::engagement_tracked(article_id, update.kind().as_str());
        Ok(())
    }

    /// The last persisted score breakdown for one article.
    pub async fn article_score(&self, article_id: &str) -> RankResult<Option<ArticleScore>> {
        self.store.get_article_score(article_id).await
    }

    /// Best persisted scores without recomputation.
    pub async fn cached_top_stories(
        &self,
        limit: usize,
        min_score: f64,
    ) -> RankResult<Vec<Article>> {
        let limit = limit.min(self.config.max_limit);
        if limit == 0 {
            return Ok(Vec::new());
        }
        let ids = self.store.top_scored_articles(limit, min_score).await?;
        self.articles.articles_by_ids(&ids).await
    }

    /// Which signals are currently running on fallbacks.
    pub fn degradation_snapshot(&self) -> DegradationSnapshot {
        self.degradation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    async fn score_batch(
        &self,
        ctx: &ScoringContext,
        candidates: Vec<Article>,
        operation: &str,
    ) -> RankResult<BatchOutcome> {
        let total = candidates.len();
        let permits = Arc::new(Semaphore::new(self.config.max_concurrency));
        let mut tasks: JoinSet<TaskOutput> = JoinSet::new();

        for (idx, article) in candidates.into_iter().enumerate() {
            let aggregator = Arc::clone(&self.aggregator);
            let permits = Arc::clone(&permits);
            let ctx = ctx.clone();
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await;
                let result = AssertUnwindSafe(aggregator.score_detailed(&ctx, &article))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|panic| {
                        Err(RankError::ScoringFailed {
                            article_id: article.id.clone(),
                            reason: panic_message(panic.as_ref()),
                        })
                    });
                (idx, article, result)
            });
        }

        let mut slots: Vec<Option<(Article, ScoreOutcome)>> = (0..total).map(|_| None).collect();
        let mut failures = Vec::new();
        let mut completed = 0;

        loop {
            let joined = tokio::select! {
                biased;
                _ = ctx.cancelled() => None,
                joined = tasks.join_next() => match joined {
                    Some(joined) => Some(joined),
                    None => break,
                },
            };
            let Some(joined) = joined else {
                tasks.abort_all();
                events::batch_cancelled(operation, completed, total);
                return Err(RankError::Cancelled);
            };

            completed += 1;
            match joined {
                Ok((idx, article, Ok(outcome))) => slots[idx] = Some((article, outcome)),
                Ok((_, _, Err(e))) if e.is_cancelled() => {
                    tasks.abort_all();
                    events::batch_cancelled(operation, completed, total);
                    return Err(RankError::Cancelled);
                }
                Ok((_, article, Err(e))) => {
                    let reason = match e {
                        RankError::ScoringFailed { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    events::article_dropped(&article.id, &reason);
                    failures.push(ScoringFailure {
                        article_id: article.id,
                        reason,
                    });
                }
                Err(join_error) => {
                    let reason = join_error.to_string();
                    events::article_dropped("unknown", &reason);
                    failures.push(ScoringFailure {
                        article_id: "unknown".to_string(),
                        reason,
                    });
                }
            }
        }

        let scored: Vec<(Article, ScoreOutcome)> = slots.into_iter().flatten().collect();
        self.record_degradations(&scored, ctx);
        Ok(BatchOutcome { scored, failures })
    }

    /// Feed the batch's fallbacks to the tracker. A signal that scored every
    /// article without falling back counts as recovered.
    fn record_degradations(&self, scored: &[(Article, ScoreOutcome)], ctx: &ScoringContext) {
        if scored.is_empty() {
            return;
        }
        let mut tracker = self
            .degradation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut degraded = BTreeSet::new();
        for (_, outcome) in scored {
            for event in &outcome.degradations {
                degraded.insert(event.signal);
                tracker.record(event.clone());
            }
        }
        for signal in Signal::ALL {
            if !degraded.contains(&signal) {
                tracker.mark_recovered(signal, ctx.now);
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("scoring panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("scoring panicked: {s}")
    } else {
        "scoring panicked".to_string()
    }
}
