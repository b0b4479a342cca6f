mod collaborator_error;
mod store_error;

pub use collaborator_error::CollaboratorError;
pub use store_error::StoreError;

/// Convenience alias used across the workspace.
pub type RankResult<T> = Result<T, RankError>;

/// Top-level error for the ranking engine.
///
/// Collaborator and store failures are wrapped so that scoring code can decide
/// whether to absorb them (sub-scores fall back to defaults) or surface them.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("unknown engagement kind: {kind}")]
    UnknownEngagementKind { kind: String },

    #[error("invalid value {value} for engagement kind {kind}: {reason}")]
    InvalidEngagementValue {
        kind: String,
        value: f64,
        reason: String,
    },

    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("validation failed: {reason}")]
    Validation { reason: String },

    #[error("ranking cancelled")]
    Cancelled,

    #[error("scoring failed for article {article_id}: {reason}")]
    ScoringFailed { article_id: String, reason: String },
}

impl RankError {
    /// True when the error means the whole batch was aborted by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RankError::Cancelled)
    }

    /// True for errors caused by bad caller input or configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RankError::UnknownEngagementKind { .. }
                | RankError::InvalidEngagementValue { .. }
                | RankError::InvalidConfig { .. }
                | RankError::ConfigParse(_)
                | RankError::Validation { .. }
        )
    }
}

impl From<toml::de::Error> for RankError {
    fn from(err: toml::de::Error) -> Self {
        RankError::ConfigParse(err.to_string())
    }
}
