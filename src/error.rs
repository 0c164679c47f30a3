//! Error types for shoprec operations.
//!
//! Algorithmic sparsity (no interactions, unknown users, no neighbors) is
//! never an error; only infrastructure and configuration failures are.

use std::fmt;

/// Main error type for shoprec operations.
///
/// # Examples
///
/// ```
/// use shoprec::error::RecommendError;
///
/// let err = RecommendError::data_access("interaction log unreachable");
/// assert!(err.to_string().contains("unreachable"));
/// ```
#[derive(Debug)]
pub enum RecommendError {
    /// The persistence layer failed to serve a read.
    DataAccess {
        /// Failure description from the store
        message: String,
    },

    /// A similarity index was requested over a matrix with no rows.
    EmptyMatrix,

    /// An interaction referenced a product the catalog does not know.
    UnknownProduct {
        /// Raw product identifier
        id: u64,
    },

    /// Invalid configuration value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendError::DataAccess { message } => {
                write!(f, "Data access failure: {message}")
            }
            RecommendError::EmptyMatrix => {
                write!(f, "Cannot build a similarity index over an empty matrix")
            }
            RecommendError::UnknownProduct { id } => {
                write!(f, "Unknown product: {id}")
            }
            RecommendError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RecommendError::Io(e) => write!(f, "I/O error: {e}"),
            RecommendError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            RecommendError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecommendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecommendError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecommendError {
    fn from(err: std::io::Error) -> Self {
        RecommendError::Io(err)
    }
}

impl From<serde_json::Error> for RecommendError {
    fn from(err: serde_json::Error) -> Self {
        RecommendError::Serialization(err.to_string())
    }
}

impl From<&str> for RecommendError {
    fn from(msg: &str) -> Self {
        RecommendError::Other(msg.to_string())
    }
}

impl From<String> for RecommendError {
    fn from(msg: String) -> Self {
        RecommendError::Other(msg)
    }
}

impl RecommendError {
    /// Create a data access error from any displayable cause
    #[must_use]
    pub fn data_access(message: impl fmt::Display) -> Self {
        Self::DataAccess {
            message: message.to_string(),
        }
    }

    /// True for failures that originate in the persistence layer.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::DataAccess { .. } | Self::Io(_))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_access_display() {
        let err = RecommendError::data_access("connection refused");
        assert!(err.to_string().contains("Data access failure"));
        assert!(err.to_string().contains("connection refused"));
        assert!(err.is_upstream());
    }

    #[test]
    fn test_empty_matrix_display() {
        let err = RecommendError::EmptyMatrix;
        assert!(err.to_string().contains("empty matrix"));
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_unknown_product_display() {
        let err = RecommendError::UnknownProduct { id: 17 };
        assert_eq!(err.to_string(), "Unknown product: 17");
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = RecommendError::InvalidHyperparameter {
            param: "default_count".to_string(),
            value: "0".to_string(),
            constraint: ">0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid hyperparameter"));
        assert!(msg.contains("default_count"));
        assert!(msg.contains(">0"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: RecommendError = io.into();
        assert!(err.to_string().contains("missing.json"));
        assert!(err.source().is_some());
        assert!(err.is_upstream());
    }

    #[test]
    fn test_from_str_and_string() {
        let err: RecommendError = "plain".into();
        assert_eq!(err.to_string(), "plain");

        let err: RecommendError = String::from("owned").into();
        assert_eq!(err.to_string(), "owned");
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<u32>("not a number");
        let err: RecommendError = parse.expect_err("invalid json").into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
