use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use newsrank_core::config::CategoryBalanceConfig;
use newsrank_ranking::{normalize_category, Categorized, CategoryBalancer};

#[derive(Debug, Clone)]
struct Candidate {
    rank: usize,
    category: String,
}

impl Categorized for Candidate {
    fn category(&self) -> &str {
        &self.category
    }
}

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("tech".to_string()),
        Just("Technology".to_string()),
        Just("business".to_string()),
        Just("sport".to_string()),
        Just("health".to_string()),
        Just("world".to_string()),
        Just("Lifestyle".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_balancer_respects_limit_and_caps(
        labels in proptest::collection::vec(label(), 0..60),
        max_per_category in 1usize..5,
        min_categories in 1usize..8,
        limit in 0usize..30,
    ) {
        let balancer = CategoryBalancer::new(&CategoryBalanceConfig {
            max_per_category,
            min_categories,
            required_categories: Vec::new(),
            category_multipliers: HashMap::new(),
        }).unwrap();
        let pool: Vec<Candidate> = labels
            .into_iter()
            .enumerate()
            .map(|(rank, category)| Candidate { rank, category })
            .collect();
        let distinct: HashSet<&str> = pool.iter().map(|c| normalize_category(&c.category)).collect();
        let distinct = distinct.len();

        let out = balancer.balance(pool.clone(), limit);

        // Only the diversity pass may grow the output past the limit.
        prop_assert!(out.items.len() <= limit + out.diversity_added);
        if out.diversity_added == 0 {
            prop_assert!(out.items.len() <= limit);
        }

        // Per-category counts never exceed the cap.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for c in &out.items {
            *counts.entry(normalize_category(&c.category)).or_insert(0) += 1;
        }
        prop_assert!(counts.values().all(|n| *n <= max_per_category));

        // No candidate is selected twice.
        let ranks: HashSet<usize> = out.items.iter().map(|c| c.rank).collect();
        prop_assert_eq!(ranks.len(), out.items.len());

        // Primary picks come out in rank order.
        let primary = out.items.len() - out.diversity_added;
        for pair in out.items[..primary].windows(2) {
            prop_assert!(pair[0].rank < pair[1].rank);
        }

        // With a non-zero limit, the floor is met whenever the pool allows it.
        if limit > 0 {
            prop_assert!(counts.len() >= min_categories.min(distinct));
        }
    }
}
