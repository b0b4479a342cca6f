use std::sync::Arc;

use chrono::{Duration, Utc};
use newsrank_core::config::{StorageBackend, StorageConfig};
use newsrank_core::models::{Article, EngagementUpdate, SourceCredibility};
use newsrank_core::traits::{ArticleSource, ScoreStore};
use newsrank_storage::{open_store, MemoryStore};

fn article(id: &str, published_at: chrono::DateTime<Utc>) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {id}"),
        content: String::new(),
        summary: None,
        url: format!("https://news.test/{id}"),
        source: "NPR".to_string(),
        category: "science".to_string(),
        image_url: None,
        published_at,
    }
}

#[tokio::test]
async fn recent_articles_are_newest_first_within_window() {
    let now = Utc::now();
    let store = MemoryStore::new();
    store.insert_articles([
        article("a", now - Duration::hours(5)),
        article("b", now - Duration::hours(1)),
        article("c", now - Duration::hours(50)),
    ]);

    let recent = store.recent_articles(Duration::hours(48), now).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let range = store
        .articles_by_date_range(now - Duration::hours(60), now - Duration::hours(4))
        .await
        .unwrap();
    let ids: Vec<_> = range.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn recent_articles_exclude_future_and_tolerate_huge_windows() {
    let now = Utc::now();
    let store = MemoryStore::new();
    store.insert_articles([
        article("past", now - Duration::hours(2)),
        article("future", now + Duration::hours(2)),
    ]);

    let recent = store.recent_articles(Duration::hours(48), now).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["past"]);

    // Reaches past the earliest representable instant.
    let recent = store
        .recent_articles(Duration::hours(5_000_000_000), now)
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_engagement_is_atomic() {
    let store = Arc::new(MemoryStore::new());
    let mut handles = Vec::new();
    for _ in 0..200 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.record_engagement("a", EngagementUpdate::Share(2)).await
        }));
    }
    for h in handles {
        h.await.unwrap().unwrap();
    }
    let m = store.get_engagement("a").await.unwrap().unwrap();
    assert_eq!(m.share_count, 400);
}

#[tokio::test]
async fn seeding_keeps_custom_ratings() {
    let store = MemoryStore::new();
    let custom = SourceCredibility::new("CNN", 0.3, 0.3, 0.0, 0.3, Utc::now());
    store.upsert_source_credibility(&custom).await.unwrap();
    store.seed_default_credibility();

    let cnn = store.get_source_credibility("CNN").await.unwrap().unwrap();
    assert_eq!(cnn.credibility_score, 0.3);
    let bbc = store.get_source_credibility("BBC News").await.unwrap().unwrap();
    assert_eq!(bbc.factual_score, 0.9);
}

#[tokio::test]
async fn open_store_memory_backend_is_seeded() {
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        ..Default::default()
    };
    let handle = open_store(&config).await.unwrap();
    assert!(handle
        .scores
        .get_source_credibility("Reuters")
        .await
        .unwrap()
        .is_some());
    assert!(handle
        .articles
        .articles_by_ids(&["none".into()])
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn open_store_sqlite_backend_uses_db_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::Sqlite,
        db_path: dir.path().join("rank.db").to_string_lossy().into_owned(),
    };
    let handle = open_store(&config).await.unwrap();
    assert!(handle
        .scores
        .get_source_credibility("The Hindu")
        .await
        .unwrap()
        .is_some());
}
