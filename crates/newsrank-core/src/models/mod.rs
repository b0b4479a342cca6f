mod article;
mod article_score;
mod content_analysis;
mod degradation_event;
mod engagement;
mod signal;
mod social_metrics;
mod source_credibility;

pub use article::Article;
pub use article_score::ArticleScore;
pub use content_analysis::ContentAnalysis;
pub use degradation_event::DegradationEvent;
pub use engagement::{EngagementKind, EngagementMetrics, EngagementUpdate};
pub use signal::Signal;
pub use social_metrics::SocialMetrics;
pub use source_credibility::SourceCredibility;
