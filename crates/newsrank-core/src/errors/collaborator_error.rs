/// Failures of external collaborators (content analysis, social metrics, article source).
///
/// These are always non-fatal to a single sub-score.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: String,
        reason: String,
    },

    #[error("{collaborator} timed out after {timeout_ms}ms")]
    Timeout {
        collaborator: String,
        timeout_ms: u64,
    },

    #[error("{collaborator} returned an invalid response: {reason}")]
    InvalidResponse {
        collaborator: String,
        reason: String,
    },
}
