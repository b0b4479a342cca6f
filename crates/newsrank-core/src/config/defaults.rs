// Single source of truth for all default values.

// --- Scoring weights ---
pub const DEFAULT_ENGAGEMENT_WEIGHT: f64 = 0.25;
pub const DEFAULT_CREDIBILITY_WEIGHT: f64 = 0.20;
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.20;
pub const DEFAULT_SOCIAL_WEIGHT: f64 = 0.15;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.20;

// --- Category balance ---
pub const DEFAULT_MAX_PER_CATEGORY: usize = 3;
pub const DEFAULT_MIN_CATEGORIES: usize = 3;

// --- Top stories ---
pub const DEFAULT_MIN_SCORE: f64 = 0.3;
pub const DEFAULT_MAX_AGE_HOURS: u64 = 48;
/// Upper bound on `max_age_hours` (about 114 years).
pub const MAX_AGE_HOURS_LIMIT: u64 = 1_000_000;
pub const DEFAULT_MAX_LIMIT: usize = 50;
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 900; // 15 minutes

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "newsrank.db";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
