use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version specified: '{0}'")]
    InvalidVersion(String),

    #[error("No version specified")]
    NoVersionSpecified,

    #[error("Baseline version unavailable: {0}")]
    Baseline(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid version error for the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        BumpError::InvalidVersion(input.into())
    }

    /// Create a baseline error with context
    pub fn baseline(msg: impl Into<String>) -> Self {
        BumpError::Baseline(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }
}
