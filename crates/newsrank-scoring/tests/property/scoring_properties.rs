use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use newsrank_core::config::ScoringWeights;
use newsrank_core::models::{EngagementMetrics, Signal};
use newsrank_scoring::aggregator::combine;
use newsrank_scoring::recency;
use newsrank_scoring::sources::normalize_engagement;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..10.0f64]
}

proptest! {
    #[test]
    fn prop_recency_strictly_decreases_within_window(
        max_age_hours in 1i64..240,
        a in 0.0..1.0f64,
        b in 0.0..1.0f64,
    ) {
        prop_assume!((a - b).abs() > 1e-3);
        let (younger, older) = if a < b { (a, b) } else { (b, a) };
        let max_age = Duration::hours(max_age_hours);
        let max_ms = max_age.num_milliseconds() as f64;
        let young_at = now() - Duration::milliseconds((younger * max_ms) as i64);
        let old_at = now() - Duration::milliseconds((older * max_ms) as i64);

        let young = recency::score(young_at, now(), max_age);
        let old = recency::score(old_at, now(), max_age);
        prop_assert!(young > old);
        prop_assert!(young <= 1.0 && old > 0.0);
    }

    #[test]
    fn prop_recency_is_zero_past_the_window(max_age_hours in 1i64..240, extra_minutes in 0i64..100_000) {
        let max_age = Duration::hours(max_age_hours);
        let published = now() - max_age - Duration::minutes(extra_minutes);
        prop_assert_eq!(recency::score(published, now(), max_age), 0.0);
    }

    #[test]
    fn prop_future_articles_count_as_brand_new(minutes_ahead in 0i64..10_000) {
        let published = now() + Duration::minutes(minutes_ahead);
        prop_assert_eq!(recency::score(published, now(), Duration::hours(48)), 1.0);
    }

    #[test]
    fn prop_final_score_stays_in_unit_interval(
        we in weight(), wcr in weight(), wco in weight(), ws in weight(), wr in weight(),
        values in proptest::collection::vec(0.0..=1.0f64, 5),
    ) {
        let weights = ScoringWeights {
            engagement: we,
            credibility: wcr,
            content: wco,
            social: ws,
            recency: wr,
        };
        let signals: Vec<(Signal, f64)> = Signal::ALL.iter().copied().zip(values.iter().copied()).collect();
        let score = combine(&weights, &signals);
        prop_assert!((0.0..=1.0).contains(&score));

        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if weights.total() > 0.0 {
            prop_assert!(score >= lo - 1e-9 && score <= hi + 1e-9);
        }
    }

    #[test]
    fn prop_engagement_is_bounded_and_monotone_in_views(
        views in 0u64..10_000_000,
        clicks in 0u64..1_000_000,
        shares in 0u64..100_000,
        read_time in 0.0..2_000.0f64,
        bounce in 0.0..=1.0f64,
        extra in 1u64..1_000,
    ) {
        let mut m = EngagementMetrics::new("p", now());
        m.view_count = views;
        m.click_count = clicks;
        m.share_count = shares;
        m.average_read_time = read_time;
        m.bounce_rate = bounce;
        let base = normalize_engagement(&m);
        prop_assert!((0.0..=1.0).contains(&base));

        m.view_count = views + extra;
        prop_assert!(normalize_engagement(&m) >= base);
    }
}
