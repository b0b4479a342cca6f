/// newsrank version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A cached content analysis younger than this is reused instead of recomputed.
pub const CONTENT_ANALYSIS_FRESHNESS_HOURS: i64 = 24;

/// Cached social metrics younger than this are reused instead of refetched.
pub const SOCIAL_METRICS_FRESHNESS_HOURS: i64 = 6;

/// Decay constant of the recency function: `exp(-rate * age / max_age)`.
pub const RECENCY_DECAY_RATE: f64 = 0.1;

/// Maximum number of keywords kept on a content analysis.
pub const MAX_KEYWORDS: usize = 10;

/// Category every unrecognized label collapses into.
pub const GENERAL_CATEGORY: &str = "general";
