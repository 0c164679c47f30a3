//! Recommendation systems.
//!
//! User-based collaborative filtering over an implicit-feedback interaction
//! log, with popularity fallbacks for cold-start users.
//!
//! # Pipeline
//!
//! - **Aggregation**: [`build_matrix`] turns `(user, product)` pairs into a
//!   user × product count matrix
//! - **Similarity**: [`NeighborIndex`] ranks matrix rows by cosine distance
//! - **Selection**: [`select`] collects what similar users touched and the
//!   user has not
//!
//! # Quick Start
//!
//! ```
//! use shoprec::recommend::{build_matrix, NeighborIndex};
//! use shoprec::{ProductId, UserId};
//!
//! let log = vec![
//!     (UserId(1), ProductId(1)),
//!     (UserId(1), ProductId(2)),
//!     (UserId(2), ProductId(1)),
//!     (UserId(2), ProductId(2)),
//!     (UserId(3), ProductId(3)),
//! ];
//! let matrix = build_matrix(&log).expect("non-empty log");
//! let index = NeighborIndex::fit(&matrix).expect("non-empty matrix");
//!
//! let neighbors = index.kneighbors_of(0, 2);
//! assert_eq!(neighbors[0].user, UserId(1));
//! assert_eq!(neighbors[1].user, UserId(2));
//! assert!(neighbors[1].distance < 1e-12);
//! ```

pub mod cached;
pub mod collaborative;
pub mod matrix;
pub mod neighbors;

pub use cached::CachedRecommender;
pub use collaborative::{
    select, CollaborativeRecommender, FallbackReason, RecommendationSource, Recommendations,
    Selection,
};
pub use matrix::{build_matrix, InteractionMatrix};
pub use neighbors::{cosine_distance, Neighbor, NeighborIndex};
