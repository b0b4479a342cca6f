/// Errors raised by score/metrics store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend error: {message}")]
    Backend { message: String },

    #[error("serialization failed for {entity}: {reason}")]
    Serialization { entity: String, reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
