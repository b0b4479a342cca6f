//! Scripted collaborators for exercising fallbacks, timeouts, and panics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use newsrank_core::context::ScoringContext;
use newsrank_core::errors::{CollaboratorError, RankError, RankResult, StoreError};
use newsrank_core::models::{
    Article, ArticleScore, ContentAnalysis, EngagementMetrics, EngagementUpdate, Signal,
    SocialMetrics, SourceCredibility,
};
use newsrank_core::traits::{ContentAnalyzer, MetricSource, ScoreStore, SocialMetricsClient};

/// What a [`ScriptedSource`] does when asked for a score.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return this value.
    Fixed(f64),
    /// Return a collaborator error.
    Fail,
    /// Sleep, then return the value.
    Slow(Duration, f64),
    /// Return `NaN`.
    NonFinite,
    /// Panic for the given article id, return the value otherwise.
    PanicFor(String, f64),
    /// Fail for the given article ids, return the value otherwise.
    FailFor(Vec<String>, f64),
    /// Return the value scaled by the article's position in the id list;
    /// unlisted ids get zero.
    ByRank(Vec<String>),
}

/// A [`MetricSource`] whose result is set up front.
#[derive(Debug)]
pub struct ScriptedSource {
    signal: Signal,
    behavior: Behavior,
    fallback: f64,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(signal: Signal, behavior: Behavior) -> Self {
        Self {
            signal,
            behavior,
            fallback: 0.5,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fixed(signal: Signal, value: f64) -> Self {
        Self::new(signal, Behavior::Fixed(value))
    }

    pub fn failing(signal: Signal) -> Self {
        Self::new(signal, Behavior::Fail)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of `score` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn unavailable(&self) -> RankError {
        RankError::Collaborator(CollaboratorError::Unavailable {
            collaborator: format!("scripted-{}", self.signal),
            reason: "scripted failure".to_string(),
        })
    }
}

#[async_trait]
impl MetricSource for ScriptedSource {
    fn signal(&self) -> Signal {
        self.signal
    }

    async fn score(&self, _ctx: &ScoringContext, article: &Article) -> RankResult<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Fixed(v) => Ok(*v),
            Behavior::Fail => Err(self.unavailable()),
            Behavior::Slow(delay, v) => {
                tokio::time::sleep(*delay).await;
                Ok(*v)
            }
            Behavior::NonFinite => Ok(f64::NAN),
            Behavior::PanicFor(id, v) => {
                if &article.id == id {
                    panic!("scripted panic for {id}");
                }
                Ok(*v)
            }
            Behavior::FailFor(ids, v) => {
                if ids.contains(&article.id) {
                    Err(self.unavailable())
                } else {
                    Ok(*v)
                }
            }
            Behavior::ByRank(ids) => {
                let n = ids.len().max(1) as f64;
                Ok(ids
                    .iter()
                    .position(|id| id == &article.id)
                    .map_or(0.0, |pos| (n - pos as f64) / n))
            }
        }
    }

    fn fallback(&self, _article: &Article) -> f64 {
        self.fallback
    }
}

fn collaborator_down(name: &str) -> RankError {
    RankError::Collaborator(CollaboratorError::Unavailable {
        collaborator: name.to_string(),
        reason: "service down".to_string(),
    })
}

/// Content analyzer that always fails.
#[derive(Debug, Default)]
pub struct FailingAnalyzer;

#[async_trait]
impl ContentAnalyzer for FailingAnalyzer {
    async fn analyze_content(&self, _title: &str, _body: &str) -> RankResult<ContentAnalysis> {
        Err(collaborator_down("content-analyzer"))
    }
}

/// Social client that always fails.
#[derive(Debug, Default)]
pub struct FailingSocialClient;

#[async_trait]
impl SocialMetricsClient for FailingSocialClient {
    async fn social_metrics(&self, _url: &str) -> RankResult<SocialMetrics> {
        Err(collaborator_down("social-client"))
    }
}

/// Content analyzer that returns a fixed analysis and counts calls.
#[derive(Debug)]
pub struct CountingAnalyzer {
    analysis: ContentAnalysis,
    calls: AtomicUsize,
}

impl CountingAnalyzer {
    pub fn new(analysis: ContentAnalysis) -> Self {
        Self {
            analysis,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentAnalyzer for CountingAnalyzer {
    async fn analyze_content(&self, _title: &str, _body: &str) -> RankResult<ContentAnalysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.analysis.clone())
    }
}

/// Social client that returns fixed metrics (re-keyed to the requested URL)
/// and counts calls.
#[derive(Debug)]
pub struct CountingSocialClient {
    metrics: SocialMetrics,
    calls: AtomicUsize,
}

impl CountingSocialClient {
    pub fn new(metrics: SocialMetrics) -> Self {
        Self {
            metrics,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocialMetricsClient for CountingSocialClient {
    async fn social_metrics(&self, url: &str) -> RankResult<SocialMetrics> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SocialMetrics {
            url: url.to_string(),
            ..self.metrics.clone()
        })
    }
}

/// Score store where every call fails with a backend error.
#[derive(Debug, Default)]
pub struct UnavailableStore;

fn store_down<T>() -> RankResult<T> {
    Err(RankError::Store(StoreError::Backend {
        message: "store unavailable".to_string(),
    }))
}

#[async_trait]
impl ScoreStore for UnavailableStore {
    async fn upsert_article_score(&self, _score: &ArticleScore) -> RankResult<()> {
        store_down()
    }

    async fn get_article_score(&self, _article_id: &str) -> RankResult<Option<ArticleScore>> {
        store_down()
    }

    async fn top_scored_articles(&self, _limit: usize, _min_score: f64) -> RankResult<Vec<String>> {
        store_down()
    }

    async fn get_engagement(&self, _article_id: &str) -> RankResult<Option<EngagementMetrics>> {
        store_down()
    }

    async fn record_engagement(
        &self,
        _article_id: &str,
        _update: EngagementUpdate,
    ) -> RankResult<()> {
        store_down()
    }

    async fn get_source_credibility(
        &self,
        _source: &str,
    ) -> RankResult<Option<SourceCredibility>> {
        store_down()
    }

    async fn upsert_source_credibility(&self, _credibility: &SourceCredibility) -> RankResult<()> {
        store_down()
    }

    async fn get_content_analysis(&self, _article_id: &str) -> RankResult<Option<ContentAnalysis>> {
        store_down()
    }

    async fn upsert_content_analysis(&self, _analysis: &ContentAnalysis) -> RankResult<()> {
        store_down()
    }

    async fn get_social_metrics(&self, _url: &str) -> RankResult<Option<SocialMetrics>> {
        store_down()
    }

    async fn upsert_social_metrics(&self, _metrics: &SocialMetrics) -> RankResult<()> {
        store_down()
    }
}
