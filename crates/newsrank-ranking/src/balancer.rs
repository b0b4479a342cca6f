//! CategoryBalancer: diversity-constrained top-K selection.
//!
//! Primary pass: walk the score-ordered candidates once, admitting an article
//! while its normalized category is under `max_per_category`, until `limit`
//! articles are admitted.
//!
//! Diversity pass: if fewer than `min_categories` distinct categories (or not
//! every required category) made it in, walk the candidates that were not
//! admitted and append the best article of each missing category. Nothing is
//! displaced, so this pass is the only way the output can grow past `limit`.

use std::collections::{HashMap, HashSet};

use newsrank_core::config::CategoryBalanceConfig;
use newsrank_core::errors::RankResult;

use crate::category::{normalize_category, Categorized};

/// Result of one balancing run.
#[derive(Debug, Clone, PartialEq)]
pub struct Balanced<T> {
    /// Selected items in output order.
    pub items: Vec<T>,
    /// How many items the diversity pass appended.
    pub diversity_added: usize,
}

/// Applies per-category caps and the diversity floor to a ranked pool.
#[derive(Debug, Clone)]
pub struct CategoryBalancer {
    max_per_category: usize,
    min_categories: usize,
    required: Vec<&'static str>,
    multipliers: HashMap<&'static str, f64>,
}

impl CategoryBalancer {
    pub fn new(config: &CategoryBalanceConfig) -> RankResult<Self> {
        config.validate()?;

        let mut required = Vec::new();
        for raw in &config.required_categories {
            let category = normalize_category(raw);
            if !required.contains(&category) {
                required.push(category);
            }
        }

        // Synonyms fold onto the canonical name; an entry under the canonical
        // name itself wins, otherwise the smallest raw key wins.
        let mut entries: Vec<(&String, &f64)> = config.category_multipliers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let mut multipliers = HashMap::new();
        for (raw, multiplier) in entries {
            let category = normalize_category(raw);
            if raw.trim().eq_ignore_ascii_case(category) {
                multipliers.insert(category, *multiplier);
            } else {
                multipliers.entry(category).or_insert(*multiplier);
            }
        }

        Ok(Self {
            max_per_category: config.max_per_category,
            min_categories: config.min_categories,
            required,
            multipliers,
        })
    }

    /// Ordering-key multiplier for a raw category label (1.0 when unset).
    pub fn multiplier(&self, raw_category: &str) -> f64 {
        self.multipliers
            .get(normalize_category(raw_category))
            .copied()
            .unwrap_or(1.0)
    }

    /// Select from `candidates`, which must already be sorted best first.
    pub fn balance<T: Categorized>(&self, candidates: Vec<T>, limit: usize) -> Balanced<T> {
        if limit == 0 || candidates.is_empty() {
            return Balanced {
                items: Vec::new(),
                diversity_added: 0,
            };
        }

        let categories: Vec<&'static str> = candidates
            .iter()
            .map(|c| normalize_category(c.category()))
            .collect();

        let mut admitted = vec![false; candidates.len()];
        let mut order = Vec::with_capacity(limit);
        let mut counts: HashMap<&'static str, usize> = HashMap::new();

        for (idx, category) in categories.iter().enumerate() {
            if order.len() >= limit {
                break;
            }
            let count = counts.entry(*category).or_insert(0);
            if *count >= self.max_per_category {
                continue;
            }
            *count += 1;
            admitted[idx] = true;
            order.push(idx);
        }

        let mut present: HashSet<&'static str> = counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(c, _)| *c)
            .collect();

        let mut diversity_added = 0;
        if !self.floor_met(&present) {
            for (idx, category) in categories.iter().enumerate() {
                if self.floor_met(&present) {
                    break;
                }
                if admitted[idx] || present.contains(category) {
                    continue;
                }
                let needed =
                    present.len() < self.min_categories || self.required.contains(category);
                if !needed {
                    continue;
                }
                present.insert(*category);
                admitted[idx] = true;
                order.push(idx);
                diversity_added += 1;
            }
            tracing::debug!(
                diversity_added,
                categories = present.len(),
                "category diversity pass applied"
            );
        }

        let mut slots: Vec<Option<T>> = candidates.into_iter().map(Some).collect();
        let items = order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();

        Balanced {
            items,
            diversity_added,
        }
    }

    fn floor_met(&self, present: &HashSet<&'static str>) -> bool {
        present.len() >= self.min_categories
            && self.required.iter().all(|r| present.contains(r))
    }
}
