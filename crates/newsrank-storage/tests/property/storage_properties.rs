//! Property tests: engagement counters match the sum of increments, and both
//! stores fold updates identically.

use proptest::prelude::*;

use newsrank_core::models::EngagementUpdate;
use newsrank_core::traits::ScoreStore;
use newsrank_storage::{MemoryStore, SqliteStore};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn update_strategy() -> impl Strategy<Value = EngagementUpdate> {
    prop_oneof![
        (0u64..1_000).prop_map(EngagementUpdate::View),
        (0u64..1_000).prop_map(EngagementUpdate::Click),
        (0u64..1_000).prop_map(EngagementUpdate::Share),
        (0u64..600).prop_map(EngagementUpdate::ReadTime),
        (0.0f64..=1.0).prop_map(EngagementUpdate::BounceRate),
    ]
}

proptest! {
    #[test]
    fn prop_view_count_is_sum_of_increments(views in prop::collection::vec(0u64..10_000, 1..30)) {
        let rt = runtime();
        let store = SqliteStore::open_in_memory().unwrap();
        let total: u64 = views.iter().sum();

        let m = rt.block_on(async {
            for v in &views {
                store.record_engagement("a", EngagementUpdate::View(*v)).await.unwrap();
            }
            store.get_engagement("a").await.unwrap().unwrap()
        });

        prop_assert_eq!(m.view_count, total);
    }

    #[test]
    fn prop_memory_and_sqlite_agree(updates in prop::collection::vec(update_strategy(), 1..25)) {
        let rt = runtime();
        let memory = MemoryStore::new();
        let sqlite = SqliteStore::open_in_memory().unwrap();

        let (a, b) = rt.block_on(async {
            for u in &updates {
                memory.record_engagement("x", *u).await.unwrap();
                sqlite.record_engagement("x", *u).await.unwrap();
            }
            (
                memory.get_engagement("x").await.unwrap().unwrap(),
                sqlite.get_engagement("x").await.unwrap().unwrap(),
            )
        });

        prop_assert_eq!(a.view_count, b.view_count);
        prop_assert_eq!(a.click_count, b.click_count);
        prop_assert_eq!(a.share_count, b.share_count);
        prop_assert!((a.average_read_time - b.average_read_time).abs() < 1e-9);
        prop_assert!((a.bounce_rate - b.bounce_rate).abs() < 1e-12);
    }
}
