//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use shoprec::prelude::*;
//! ```

pub use crate::catalog::{Category, Product};
pub use crate::config::{CandidateOrder, RecommenderConfig};
pub use crate::error::{RecommendError, Result};
pub use crate::interaction::{Interaction, InteractionKind, ProductId, UserId};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{
    CachedRecommender, CollaborativeRecommender, RecommendationSource, Recommendations,
};
pub use crate::service::{get_user_recommendations, DEFAULT_RECOMMENDATIONS};
pub use crate::store::{InMemoryStore, InteractionLog, ProductCatalog};
