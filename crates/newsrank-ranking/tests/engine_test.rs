use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use newsrank_analysis::{HeuristicAnalyzer, SimulatedSocialClient};
use newsrank_core::config::{CategoryBalanceConfig, ScoringWeights, TopStoriesConfig};
use newsrank_core::models::{Article, Signal};
use newsrank_core::traits::{MetricSource, ScoreStore};
use newsrank_core::{RankError, ScoringContext};
use newsrank_ranking::{normalize_category, TopStoriesEngine};
use newsrank_scoring::ScoreAggregator;
use newsrank_storage::MemoryStore;
use test_fixtures::{
    fixed_now, golden_articles, ArticleBuilder, Behavior, FailingAnalyzer, FailingSocialClient,
    ScriptedSource, UnavailableStore,
};

/// Final score equals the engagement source's value.
fn engagement_only() -> TopStoriesConfig {
    TopStoriesConfig {
        weights: ScoringWeights {
            engagement: 1.0,
            credibility: 0.0,
            content: 0.0,
            social: 0.0,
            recency: 0.0,
        },
        balance: CategoryBalanceConfig {
            max_per_category: 10,
            min_categories: 1,
            ..CategoryBalanceConfig::default()
        },
        min_score: 0.0,
        ..TopStoriesConfig::default()
    }
}

fn scripted_engine(
    store: Arc<MemoryStore>,
    source: ScriptedSource,
    config: TopStoriesConfig,
) -> TopStoriesEngine {
    let sources: Vec<Arc<dyn MetricSource>> = vec![Arc::new(source)];
    let aggregator = ScoreAggregator::new(store.clone(), sources, &config).unwrap();
    TopStoriesEngine::new(aggregator, store.clone(), store, config).unwrap()
}

fn ids(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.id.as_str()).collect()
}

#[tokio::test]
async fn golden_set_is_ranked_and_balanced() {
    let store = Arc::new(MemoryStore::new());
    store.seed_default_credibility();
    store.insert_articles(golden_articles());
    let engine = TopStoriesEngine::standard(
        store.clone(),
        store.clone(),
        Arc::new(HeuristicAnalyzer::new()),
        Arc::new(SimulatedSocialClient::new()),
        TopStoriesConfig::default(),
    )
    .unwrap();

    let ranked = engine
        .rank_top_stories(&ScoringContext::at(fixed_now()), 11)
        .await
        .unwrap();

    // Twelve candidates; the fourth technology story is capped out.
    assert_eq!(ranked.len(), 11);
    let technology = ranked
        .iter()
        .filter(|r| normalize_category(&r.article.category) == "technology")
        .count();
    assert_eq!(technology, 3);
    for pair in ranked.windows(2) {
        assert!(pair[0].score.final_score >= pair[1].score.final_score);
    }
    for r in &ranked {
        assert!(r.score.final_score >= 0.3);
        assert!(r.score.fallbacks.is_empty());
    }
}

#[tokio::test]
async fn ranking_follows_scores_not_insertion_order() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("x3").category("world").hours_ago(1).build(),
        ArticleBuilder::new("x1").category("world").hours_ago(2).build(),
        ArticleBuilder::new("x4").category("world").hours_ago(3).build(),
        ArticleBuilder::new("x2").category("world").hours_ago(4).build(),
    ]);
    let source = ScriptedSource::new(
        Signal::Engagement,
        Behavior::ByRank(vec!["x1".into(), "x2".into(), "x3".into(), "x4".into()]),
    );
    let engine = scripted_engine(store, source, engagement_only());

    let top = engine
        .calculate_top_stories(&ScoringContext::at(fixed_now()), 10)
        .await
        .unwrap();
    assert_eq!(ids(&top), vec!["x1", "x2", "x3", "x4"]);
}

#[tokio::test]
async fn equal_scores_keep_newest_first_order() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("c").hours_ago(3).build(),
        ArticleBuilder::new("a").hours_ago(1).build(),
        ArticleBuilder::new("b").hours_ago(2).build(),
    ]);
    let engine = scripted_engine(
        store,
        ScriptedSource::fixed(Signal::Engagement, 0.5),
        engagement_only(),
    );

    let top = engine
        .calculate_top_stories(&ScoringContext::at(fixed_now()), 10)
        .await
        .unwrap();
    assert_eq!(ids(&top), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn every_collaborator_down_still_ranks_from_defaults() {
    let articles = Arc::new(MemoryStore::new());
    articles.insert_articles(golden_articles());
    let engine = TopStoriesEngine::standard(
        articles,
        Arc::new(UnavailableStore),
        Arc::new(FailingAnalyzer),
        Arc::new(FailingSocialClient),
        TopStoriesConfig::default(),
    )
    .unwrap();

    let ranked = engine
        .rank_top_stories(&ScoringContext::at(fixed_now()), 8)
        .await
        .unwrap();

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score.final_score >= pair[1].score.final_score);
    }
    for r in &ranked {
        assert_eq!(r.score.fallbacks.len(), 4);
    }

    let snapshot = engine.degradation_snapshot();
    assert!(snapshot.is_degraded());
    assert_eq!(
        snapshot.degraded_signals,
        vec![Signal::Engagement, Signal::Credibility, Signal::Content, Signal::Social]
    );
}

#[tokio::test]
async fn refresh_survives_one_panicking_article() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles(
        (0..10).map(|i| ArticleBuilder::new(&format!("a-{i}")).minutes_ago(i * 10 + 1).build()),
    );
    let engine = scripted_engine(
        store.clone(),
        ScriptedSource::new(Signal::Engagement, Behavior::PanicFor("a-3".into(), 0.7)),
        engagement_only(),
    );

    let report = engine
        .refresh_scores(&ScoringContext::at(fixed_now()))
        .await
        .unwrap();

    assert_eq!(report.total, 10);
    assert_eq!(report.succeeded, 9);
    assert_eq!(report.failed, 1);
    assert_eq!(report.failures[0].article_id, "a-3");
    assert!(report.failures[0].reason.contains("panicked"));
    assert_eq!(store.score_count(), 9);
    assert!(engine.article_score("a-3").await.unwrap().is_none());
    assert!(engine.article_score("a-4").await.unwrap().is_some());
}

#[tokio::test]
async fn min_score_filters_on_unscaled_score() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("low").category("tech").build(),
        ArticleBuilder::new("high").category("world").hours_ago(2).build(),
    ]);
    let mut config = engagement_only();
    config.min_score = 0.6;
    config.balance.category_multipliers = HashMap::from([("technology".to_string(), 10.0)]);
    let source = ScriptedSource::new(
        Signal::Engagement,
        Behavior::ByRank(vec!["high".into(), "low".into()]),
    );
    let engine = scripted_engine(store, source, config);

    let top = engine
        .calculate_top_stories(&ScoringContext::at(fixed_now()), 10)
        .await
        .unwrap();
    // "low" scores 0.5: boosted by its multiplier but still under min_score.
    assert_eq!(ids(&top), vec!["high"]);
}

#[tokio::test]
async fn category_multiplier_reorders_candidates() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("s1").category("sports").build(),
        ArticleBuilder::new("t1").category("tech").hours_ago(2).build(),
    ]);
    let mut config = engagement_only();
    config.balance.category_multipliers = HashMap::from([("Technology".to_string(), 3.0)]);
    let source = ScriptedSource::new(
        Signal::Engagement,
        Behavior::ByRank(vec!["s1".into(), "t1".into()]),
    );
    let engine = scripted_engine(store, source, config);

    let ranked = engine
        .rank_top_stories(&ScoringContext::at(fixed_now()), 10)
        .await
        .unwrap();
    let order: Vec<_> = ranked.iter().map(|r| r.article.id.as_str()).collect();
    assert_eq!(order, vec!["t1", "s1"]);
    // Persisted scores are not scaled.
    assert_eq!(ranked[0].score.final_score, 0.5);
}

#[tokio::test]
async fn limits_are_clamped() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles((0..5).map(|i| ArticleBuilder::new(&format!("n{i}")).build()));
    let mut config = engagement_only();
    config.max_limit = 2;
    let engine = scripted_engine(
        store,
        ScriptedSource::fixed(Signal::Engagement, 0.9),
        config,
    );
    let ctx = ScoringContext::at(fixed_now());

    assert!(engine.calculate_top_stories(&ctx, 0).await.unwrap().is_empty());
    assert_eq!(engine.calculate_top_stories(&ctx, 1_000).await.unwrap().len(), 2);
}

#[tokio::test]
async fn articles_outside_the_window_are_not_candidates() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("fresh").hours_ago(47).build(),
        ArticleBuilder::new("stale").hours_ago(49).build(),
    ]);
    let engine = scripted_engine(
        store,
        ScriptedSource::fixed(Signal::Engagement, 0.9),
        engagement_only(),
    );

    let top = engine
        .calculate_top_stories(&ScoringContext::at(fixed_now()), 10)
        .await
        .unwrap();
    assert_eq!(ids(&top), vec!["fresh"]);
}

#[tokio::test]
async fn cancelled_context_fails_the_batch() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles((0..4).map(|i| ArticleBuilder::new(&format!("c{i}")).build()));
    let engine = scripted_engine(
        store,
        ScriptedSource::fixed(Signal::Engagement, 0.9),
        engagement_only(),
    );
    let ctx = ScoringContext::at(fixed_now());
    ctx.cancel();

    let err = engine.calculate_top_stories(&ctx, 10).await.unwrap_err();
    assert!(err.is_cancelled());
    let err = engine.refresh_scores(&ctx).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cancellation_aborts_in_flight_scoring() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles((0..20).map(|i| ArticleBuilder::new(&format!("s{i}")).build()));
    let mut config = engagement_only();
    config.collaborator_timeout_ms = 60_000;
    config.max_concurrency = 4;
    let engine = scripted_engine(
        store.clone(),
        ScriptedSource::new(
            Signal::Engagement,
            Behavior::Slow(Duration::from_secs(30), 0.9),
        ),
        config,
    );
    let ctx = ScoringContext::at(fixed_now());
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let started = std::time::Instant::now();
    let err = engine.calculate_top_stories(&ctx, 10).await.unwrap_err();
    assert!(matches!(err, RankError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(store.score_count(), 0);
}

#[tokio::test]
async fn tracked_views_increment_exactly() {
    let store = Arc::new(MemoryStore::new());
    let engine = scripted_engine(
        store.clone(),
        ScriptedSource::fixed(Signal::Engagement, 0.5),
        engagement_only(),
    );
    let ctx = ScoringContext::at(fixed_now());

    engine.track_engagement(&ctx, "v1", "view", 5.0).await.unwrap();
    engine.track_engagement(&ctx, "v1", "view", 3.0).await.unwrap();
    engine.track_engagement(&ctx, "v1", "read_time", 120.0).await.unwrap();
    engine.track_engagement(&ctx, "v1", "bounce_rate", 0.4).await.unwrap();

    let metrics = store.get_engagement("v1").await.unwrap().unwrap();
    assert_eq!(metrics.view_count, 8);
    assert_eq!(metrics.average_read_time, 60.0);
    assert_eq!(metrics.bounce_rate, 0.4);
}

#[tokio::test]
async fn invalid_engagement_is_rejected_without_side_effects() {
    let store = Arc::new(MemoryStore::new());
    let engine = scripted_engine(
        store.clone(),
        ScriptedSource::fixed(Signal::Engagement, 0.5),
        engagement_only(),
    );
    let ctx = ScoringContext::at(fixed_now());

    let err = engine.track_engagement(&ctx, "v1", "like", 1.0).await.unwrap_err();
    assert!(matches!(err, RankError::UnknownEngagementKind { ref kind } if kind == "like"));

    for (kind, value) in [("view", -1.0), ("click", 1.5), ("bounce_rate", 1.2), ("share", f64::NAN)] {
        let err = engine.track_engagement(&ctx, "v1", kind, value).await.unwrap_err();
        assert!(err.is_validation(), "{kind} {value} should be rejected");
    }

    let err = engine.track_engagement(&ctx, " ", "view", 1.0).await.unwrap_err();
    assert!(err.is_validation());

    assert!(store.get_engagement("v1").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_tracking_never_loses_increments() {
    let store = Arc::new(MemoryStore::new());
    let engine = Arc::new(scripted_engine(
        store.clone(),
        ScriptedSource::fixed(Signal::Engagement, 0.5),
        engagement_only(),
    ));

    let mut handles = Vec::new();
    for _ in 0..100 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let ctx = ScoringContext::at(fixed_now());
            engine.track_engagement(&ctx, "hot", "view", 1.0).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let metrics = store.get_engagement("hot").await.unwrap().unwrap();
    assert_eq!(metrics.view_count, 100);
}

#[tokio::test]
async fn cached_top_stories_reads_persisted_scores() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([
        ArticleBuilder::new("p1").build(),
        ArticleBuilder::new("p2").hours_ago(2).build(),
        ArticleBuilder::new("p3").hours_ago(3).build(),
    ]);
    let source = ScriptedSource::new(
        Signal::Engagement,
        Behavior::ByRank(vec!["p3".into(), "p1".into(), "p2".into()]),
    );
    let engine = scripted_engine(store, source, engagement_only());

    assert!(engine.cached_top_stories(10, 0.0).await.unwrap().is_empty());
    engine
        .refresh_scores(&ScoringContext::at(fixed_now()))
        .await
        .unwrap();

    let cached = engine.cached_top_stories(10, 0.5).await.unwrap();
    assert_eq!(ids(&cached), vec!["p3", "p1"]);
}

#[tokio::test]
async fn fallbacks_recover_once_signals_score_again() {
    let store = Arc::new(MemoryStore::new());
    store.insert_articles([ArticleBuilder::new("f1").build(), ArticleBuilder::new("f2").build()]);
    let source = ScriptedSource::new(
        Signal::Engagement,
        Behavior::FailFor(vec!["f1".into()], 0.8),
    );
    let engine = scripted_engine(store.clone(), source, engagement_only());
    let ctx = ScoringContext::at(fixed_now());

    engine.calculate_top_stories(&ctx, 10).await.unwrap();
    assert_eq!(engine.degradation_snapshot().degraded_signals, vec![Signal::Engagement]);

    store.insert_article(ArticleBuilder::new("f1").hours_ago(100).build());
    engine.calculate_top_stories(&ctx, 10).await.unwrap();
    assert!(!engine.degradation_snapshot().is_degraded());
}

#[tokio::test]
async fn persisted_score_matches_ranked_breakdown() {
    let store = Arc::new(MemoryStore::new());
    store.insert_article(ArticleBuilder::new("k1").build());
    let engine = scripted_engine(
        store.clone(),
        ScriptedSource::fixed(Signal::Engagement, 0.42),
        engagement_only(),
    );

    let ranked = engine
        .rank_top_stories(&ScoringContext::at(fixed_now()), 5)
        .await
        .unwrap();
    let persisted = store.get_article_score("k1").await.unwrap().unwrap();
    assert_eq!(ranked[0].score, persisted);
    assert!((persisted.final_score - 0.42).abs() < 1e-12);
}
