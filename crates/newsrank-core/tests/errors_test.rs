use newsrank_core::errors::*;

#[test]
fn unknown_engagement_kind_carries_kind() {
    let err = RankError::UnknownEngagementKind {
        kind: "like".into(),
    };
    assert!(err.to_string().contains("like"));
    assert!(err.is_validation());
    assert!(!err.is_cancelled());
}

#[test]
fn cancelled_is_distinct_from_scoring_failures() {
    assert!(RankError::Cancelled.is_cancelled());
    let failed = RankError::ScoringFailed {
        article_id: "a1".into(),
        reason: "panicked".into(),
    };
    assert!(!failed.is_cancelled());
    assert!(failed.to_string().contains("a1"));
}

#[test]
fn collaborator_timeout_carries_values() {
    let err = CollaboratorError::Timeout {
        collaborator: "social".into(),
        timeout_ms: 250,
    };
    let msg = err.to_string();
    assert!(msg.contains("social"));
    assert!(msg.contains("250"));
}

// --- From impls ---

#[test]
fn store_error_converts_to_rank_error() {
    let store_err = StoreError::Backend {
        message: "disk full".into(),
    };
    let err: RankError = store_err.into();
    assert!(matches!(err, RankError::Store(_)));
    assert!(err.to_string().contains("disk full"));
    assert!(!err.is_validation());
}

#[test]
fn collaborator_error_converts_to_rank_error() {
    let err: RankError = CollaboratorError::Unavailable {
        collaborator: "nlp".into(),
        reason: "connection refused".into(),
    }
    .into();
    assert!(matches!(err, RankError::Collaborator(_)));
}
