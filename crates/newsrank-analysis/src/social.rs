//! SimulatedSocialClient: deterministic share counts for environments without
//! platform API access.
//!
//! Counts derive from a BLAKE3 hash of the URL, so the same URL always yields
//! the same metrics. Articles from popular outlets get a bonus on every platform.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

use newsrank_core::errors::RankResult;
use newsrank_core::models::SocialMetrics;
use newsrank_core::traits::SocialMetricsClient;

const POPULAR_DOMAINS: &[&str] = &[
    "bbc.co.uk",
    "bbc.com",
    "cnn.com",
    "reuters.com",
    "techcrunch.com",
    "theguardian.com",
    "nytimes.com",
    "washingtonpost.com",
    "ndtv.com",
    "timesofindia.indiatimes.com",
    "thehindu.com",
];

/// Hash-seeded social metrics client.
#[derive(Debug, Clone)]
pub struct SimulatedSocialClient {
    popular_domains: Vec<String>,
}

impl Default for SimulatedSocialClient {
    fn default() -> Self {
        Self {
            popular_domains: POPULAR_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl SimulatedSocialClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the popular-domain list.
    pub fn with_popular_domains(domains: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            popular_domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the URL's host is, or is a subdomain of, a popular domain.
    pub fn is_popular(&self, url: &str) -> bool {
        let host = host_of(url);
        self.popular_domains
            .iter()
            .any(|d| host == d.as_str() || host.ends_with(&format!(".{d}")))
    }

    /// Metrics for `url` at the current instant.
    pub fn simulate(&self, url: &str) -> SocialMetrics {
        let h = url_hash(url);
        let popular = self.is_popular(url);

        let mut twitter = h % 51;
        let mut facebook = h % 100;
        let mut linkedin = h % 30;
        let mut reddit = (h % 200) as i64 - 50;
        if popular {
            twitter += 10 + h % 20;
            facebook += 20 + h % 40;
            linkedin += 5 + h % 10;
            reddit += 25;
        }
        let reddit = reddit.max(0) as u64;

        let total_shares = twitter + facebook + linkedin;
        let social_mentions = total_shares + reddit;

        SocialMetrics {
            url: url.to_string(),
            twitter_shares: twitter,
            facebook_shares: facebook,
            linkedin_shares: linkedin,
            reddit_score: reddit,
            total_shares,
            social_mentions,
            sentiment_by_platform: platform_sentiment(h),
            last_fetched: Utc::now(),
        }
    }
}

#[async_trait]
impl SocialMetricsClient for SimulatedSocialClient {
    async fn social_metrics(&self, url: &str) -> RankResult<SocialMetrics> {
        let metrics = self.simulate(url);
        tracing::debug!(
            url = %url,
            total_shares = metrics.total_shares,
            social_mentions = metrics.social_mentions,
            "social metrics simulated"
        );
        Ok(metrics)
    }
}

fn url_hash(url: &str) -> u64 {
    let digest = blake3::hash(url.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Per-platform sentiment in `[-1, 1)` plus their mean under `overall`.
fn platform_sentiment(h: u64) -> BTreeMap<String, f64> {
    let scale = |v: u64| ((v % 200) as f64 - 100.0) / 100.0;
    let twitter = scale(h);
    let facebook = scale(h.wrapping_mul(2));
    let reddit = scale(h.wrapping_mul(3));

    BTreeMap::from([
        ("twitter".to_string(), twitter),
        ("facebook".to_string(), facebook),
        ("reddit".to_string(), reddit),
        ("overall".to_string(), (twitter + facebook + reddit) / 3.0),
    ])
}

fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    host.split(':').next().unwrap_or(host)
}
