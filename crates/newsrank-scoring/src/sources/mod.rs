//! The four metric sources behind [`MetricSource`](newsrank_core::traits::MetricSource).

mod content;
mod credibility;
mod engagement;
mod social;

pub use content::{basic_content_score, ContentSource};
pub use credibility::{combine_credibility, known_outlet_score, CredibilitySource, DEFAULT_CREDIBILITY};
pub use engagement::{normalize_engagement, EngagementSource, NEUTRAL_ENGAGEMENT};
pub use social::{normalize_social, SocialSource, DEFAULT_SOCIAL};

/// `log10(count + 1) / k`, capped at 1.0.
///
/// Squashes counters spanning several orders of magnitude into `[0, 1]`;
/// `k` is the decimal magnitude treated as saturation.
pub(crate) fn log_scaled(count: u64, k: f64) -> f64 {
    ((count as f64 + 1.0).log10() / k).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::log_scaled;

    #[test]
    fn log_scaled_is_zero_at_zero_and_saturates() {
        assert_eq!(log_scaled(0, 4.0), 0.0);
        assert!((log_scaled(9_999, 4.0) - 1.0).abs() < 1e-12);
        assert_eq!(log_scaled(10_000_000, 4.0), 1.0);
    }
}
