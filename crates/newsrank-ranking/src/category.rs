//! Category normalization: case-insensitive labels mapped through a synonym
//! table onto a closed set, with everything else collapsing into "general".

use newsrank_core::constants::GENERAL_CATEGORY;

/// Categories the balancer distinguishes.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "technology",
    "business",
    "sports",
    "politics",
    "health",
    "science",
    "entertainment",
    "world",
];

const SYNONYMS: &[(&str, &str)] = &[
    ("tech", "technology"),
    ("sport", "sports"),
    ("world news", "world"),
];

/// Canonical category for a raw label.
pub fn normalize_category(raw: &str) -> &'static str {
    let label = raw.trim().to_lowercase();
    if let Some((_, canonical)) = SYNONYMS.iter().find(|(alias, _)| *alias == label) {
        return *canonical;
    }
    KNOWN_CATEGORIES
        .iter()
        .find(|known| **known == label)
        .copied()
        .unwrap_or(GENERAL_CATEGORY)
}

/// Anything the balancer can group by category.
pub trait Categorized {
    /// The raw, un-normalized category label.
    fn category(&self) -> &str;
}

impl Categorized for newsrank_core::models::Article {
    fn category(&self) -> &str {
        &self.category
    }
}
