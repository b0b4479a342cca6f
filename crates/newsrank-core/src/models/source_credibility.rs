use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference ratings for a news outlet. Slow-changing; read-only during a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCredibility {
    pub source_name: String,
    /// [0.0, 1.0]
    pub credibility_score: f64,
    /// [0.0, 1.0]
    pub reliability_score: f64,
    /// -1.0 (left) to 1.0 (right), 0.0 neutral. Kept for transparency only.
    pub bias_score: f64,
    /// [0.0, 1.0]
    pub factual_score: f64,
    pub updated_at: DateTime<Utc>,
}

impl SourceCredibility {
    pub fn new(
        source_name: impl Into<String>,
        credibility: f64,
        reliability: f64,
        bias: f64,
        factual: f64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            credibility_score: credibility,
            reliability_score: reliability,
            bias_score: bias,
            factual_score: factual,
            updated_at,
        }
    }

    /// Seed ratings for well-known outlets, inserted by stores when absent.
    pub fn default_outlets(now: DateTime<Utc>) -> Vec<SourceCredibility> {
        [
            ("BBC News", 0.9, 0.95, 0.0, 0.9),
            ("Reuters", 0.9, 0.95, 0.0, 0.95),
            ("Associated Press", 0.9, 0.95, 0.0, 0.9),
            ("NPR", 0.85, 0.9, -0.1, 0.85),
            ("The Guardian", 0.8, 0.85, -0.2, 0.8),
            ("CNN", 0.75, 0.8, -0.15, 0.75),
            ("TechCrunch", 0.7, 0.8, 0.0, 0.75),
            ("NDTV", 0.75, 0.8, 0.0, 0.75),
            ("Times of India", 0.7, 0.75, 0.0, 0.7),
            ("The Hindu", 0.8, 0.85, 0.0, 0.8),
            ("Hindustan Times", 0.7, 0.75, 0.0, 0.7),
        ]
        .into_iter()
        .map(|(name, c, r, b, f)| SourceCredibility::new(name, c, r, b, f, now))
        .collect()
    }
}
