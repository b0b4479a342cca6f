//! Span definitions per operation: top stories, refresh, per-article scoring.

/// Create a top-stories span.
#[macro_export]
macro_rules! top_stories_span {
    ($limit:expr) => {
        tracing::info_span!("newsrank.top_stories", limit = $limit)
    };
}

/// Create a score-refresh span.
#[macro_export]
macro_rules! refresh_span {
    () => {
        tracing::info_span!("newsrank.refresh")
    };
}

/// Create a per-article scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($article_id:expr) => {
        tracing::debug_span!("newsrank.scoring", article_id = %$article_id)
    };
}

