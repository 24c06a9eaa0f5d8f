use std::path::PathBuf;
use thiserror::Error;

/// Result type for pageaudit-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Artifacts file not found at: {0}")]
    ArtifactsNotFound(PathBuf),

    #[error("Required artifact missing: {0}")]
    MissingArtifact(String),
}
