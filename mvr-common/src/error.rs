use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MvrError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("DownloadError: Failed to download '{0}' from '{1}': {2}")]
    DownloadError(String, String, String),

    #[error("HttpError: {0}")]
    HttpError(String),

    #[error("Checksum Mismatch: {0}")]
    ChecksumMismatch(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("IoError: {0}")]
    IoError(String),

    #[error("Commit Error: {0}")]
    CommitError(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Generic Error: {0}")]
    Generic(String),

    #[error("Parsing Error in {0}: {1}")]
    ParseError(&'static str, String),

    #[error("Failed to fetch maven artifact '{0}': {1}")]
    ArtifactFetch(String, #[source] Box<MvrError>),
}

impl MvrError {
    /// True when the artifact was fetched but its checksum did not match, as
    /// opposed to not being fetched at all.
    pub fn is_validation_failure(&self) -> bool {
        match self {
            MvrError::ChecksumMismatch(_) => true,
            MvrError::ArtifactFetch(_, cause) => cause.is_validation_failure(),
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            MvrError::Cancelled(_) => true,
            MvrError::ArtifactFetch(_, cause) => cause.is_cancelled(),
            _ => false,
        }
    }
}

impl From<std::io::Error> for MvrError {
    fn from(err: std::io::Error) -> Self {
        MvrError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for MvrError {
    fn from(err: serde_json::Error) -> Self {
        MvrError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MvrError>;
