use thiserror::Error;

/// Result type for audit evaluation
pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error(transparent)]
    Artifact(#[from] pageaudit_types::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
