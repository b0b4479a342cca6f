mod article_source;
mod content_analyzer;
mod metric_source;
mod score_store;
mod social_client;

pub use article_source::ArticleSource;
pub use content_analyzer::ContentAnalyzer;
pub use metric_source::MetricSource;
pub use score_store::ScoreStore;
pub use social_client::SocialMetricsClient;
