//! Error types for shoprec-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Argument rejected after parsing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Library error
    #[error("{0}")]
    Recommend(String),
}

impl CliError {
    /// Numeric status for this error
    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::Recommend(_) => 1,
            Self::InvalidArgument(_) => 2,
            Self::FileNotFound(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 7,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<shoprec::RecommendError> for CliError {
    fn from(e: shoprec::RecommendError) -> Self {
        match e {
            shoprec::RecommendError::Io(err) => Self::Io(err),
            other => Self::Recommend(other.to_string()),
        }
    }
}
