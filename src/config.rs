//! Recommender configuration.

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How candidate products are ordered before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrder {
    /// Ascending product id
    #[default]
    Ascending,
    /// Most neighbor interactions first, ties by ascending product id
    #[serde(alias = "support")]
    NeighborSupport,
}

impl CandidateOrder {
    /// Get string name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::NeighborSupport => "support",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" | "id" => Some(Self::Ascending),
            "support" | "neighbor_support" | "frequency" => Some(Self::NeighborSupport),
            _ => None,
        }
    }
}

/// Configuration for [`crate::recommend::CollaborativeRecommender`].
///
/// # Examples
///
/// ```
/// use shoprec::config::{CandidateOrder, RecommenderConfig};
///
/// let config = RecommenderConfig::from_json_str(r#"{"candidate_order": "neighbor_support"}"#)
///     .expect("valid config");
/// assert_eq!(config.default_count, 5);
/// assert_eq!(config.candidate_order, CandidateOrder::NeighborSupport);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Number of products returned when the caller does not ask for a count
    pub default_count: usize,
    /// Ordering applied to collaborative candidates
    pub candidate_order: CandidateOrder,
    /// Extra neighbors requested to make room for the query user itself
    pub neighbor_padding: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_count: crate::service::DEFAULT_RECOMMENDATIONS,
            candidate_order: CandidateOrder::Ascending,
            neighbor_padding: 1,
        }
    }
}

impl RecommenderConfig {
    /// Set the default result count.
    #[must_use]
    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// Set the candidate ordering.
    #[must_use]
    pub fn with_candidate_order(mut self, order: CandidateOrder) -> Self {
        self.candidate_order = order;
        self
    }

    /// Set the neighbor padding.
    #[must_use]
    pub fn with_neighbor_padding(mut self, padding: usize) -> Self {
        self.neighbor_padding = padding;
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns a serialization error on malformed JSON or an
    /// [`RecommendError::InvalidHyperparameter`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check value constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidHyperparameter`] if `default_count` is
    /// zero, or if `neighbor_padding` leaves no room for the query user's own
    /// row.
    pub fn validate(&self) -> Result<()> {
        if self.default_count == 0 {
            return Err(RecommendError::InvalidHyperparameter {
                param: "default_count".to_string(),
                value: self.default_count.to_string(),
                constraint: ">0".to_string(),
            });
        }
        if self.neighbor_padding == 0 {
            return Err(RecommendError::InvalidHyperparameter {
                param: "neighbor_padding".to_string(),
                value: self.neighbor_padding.to_string(),
                constraint: ">=1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.default_count, 5);
        assert_eq!(config.candidate_order, CandidateOrder::Ascending);
        assert_eq!(config.neighbor_padding, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RecommenderConfig::default()
            .with_default_count(8)
            .with_candidate_order(CandidateOrder::NeighborSupport)
            .with_neighbor_padding(2);
        assert_eq!(config.default_count, 8);
        assert_eq!(config.candidate_order, CandidateOrder::NeighborSupport);
        assert_eq!(config.neighbor_padding, 2);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RecommenderConfig::from_json_str("{}").expect("empty object is valid");
        assert_eq!(config, RecommenderConfig::default());
    }

    #[test]
    fn test_zero_default_count_rejected() {
        let err = RecommenderConfig::from_json_str(r#"{"default_count": 0}"#)
            .expect_err("zero count is invalid");
        assert!(err.to_string().contains("default_count"));
    }

    #[test]
    fn test_zero_neighbor_padding_rejected() {
        let config = RecommenderConfig::default().with_neighbor_padding(0);
        let err = config.validate().expect_err("padding must cover the query row");
        assert!(matches!(
            err,
            RecommendError::InvalidHyperparameter { ref param, .. } if param == "neighbor_padding"
        ));

        let err = RecommenderConfig::from_json_str(r#"{"neighbor_padding": 0}"#)
            .expect_err("zero padding is invalid");
        assert!(err.to_string().contains("neighbor_padding"));
        assert!(RecommenderConfig::from_json_str(r#"{"neighbor_padding": 2}"#).is_ok());
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(CandidateOrder::parse("ascending"), Some(CandidateOrder::Ascending));
        assert_eq!(CandidateOrder::parse("SUPPORT"), Some(CandidateOrder::NeighborSupport));
        assert_eq!(CandidateOrder::parse("random"), None);
        assert_eq!(CandidateOrder::NeighborSupport.as_str(), "support");
    }

    #[test]
    fn test_order_short_name_in_json() {
        let config = RecommenderConfig::from_json_str(r#"{"candidate_order": "support"}"#)
            .expect("short name accepted");
        assert_eq!(config.candidate_order, CandidateOrder::NeighborSupport);

        let name = CandidateOrder::NeighborSupport.as_str();
        let json = format!(r#"{{"candidate_order": "{name}"}}"#);
        let config = RecommenderConfig::from_json_str(&json).expect("as_str round-trips");
        assert_eq!(config.candidate_order, CandidateOrder::NeighborSupport);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("recommender.json");
        std::fs::write(&path, r#"{"default_count": 3}"#).expect("writable temp dir");

        let config = RecommenderConfig::load(&path).expect("valid file");
        assert_eq!(config.default_count, 3);
    }
}
