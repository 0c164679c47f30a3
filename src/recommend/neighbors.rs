//! Exhaustive nearest-neighbor index over matrix rows.
//!
//! Every query scans all rows and ranks them by cosine distance. The index is
//! rebuilt from the matrix on each request, so there is no approximate
//! structure to maintain.
//!
//! # Ordering
//!
//! Results are sorted by ascending distance. Equal distances are broken by
//! putting the query row first (when the query is an indexed row), then by
//! ascending row position, which is ascending user id.
//!
//! # Examples
//!
//! ```
//! use shoprec::recommend::{build_matrix, NeighborIndex};
//! use shoprec::{ProductId, UserId};
//!
//! let log = vec![
//!     (UserId(1), ProductId(1)),
//!     (UserId(2), ProductId(1)),
//!     (UserId(3), ProductId(2)),
//! ];
//! let matrix = build_matrix(&log).expect("log is not empty");
//! let index = NeighborIndex::fit(&matrix).expect("matrix has rows");
//!
//! let neighbors = index.kneighbors_of(0, 2);
//! assert_eq!(neighbors[0].user, UserId(1)); // itself
//! assert_eq!(neighbors[1].user, UserId(2)); // same product
//! ```

use super::matrix::InteractionMatrix;
use crate::error::{RecommendError, Result};
use crate::interaction::UserId;
use crate::primitives::Vector;
use std::cmp::Ordering;
use tracing::debug;

/// One query result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Row position in the matrix
    pub row: usize,
    /// User labelling that row
    pub user: UserId,
    /// Cosine distance to the query, in `[0, 2]` or `+inf`
    pub distance: f64,
}

/// Brute-force cosine index over the rows of an [`InteractionMatrix`].
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    users: Vec<UserId>,
    rows: Vec<Vector<f64>>,
}

impl NeighborIndex {
    /// Fit the index on every row of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::EmptyMatrix`] if the matrix has no rows.
    pub fn fit(matrix: &InteractionMatrix) -> Result<Self> {
        if matrix.n_users() == 0 || matrix.n_products() == 0 {
            return Err(RecommendError::EmptyMatrix);
        }

        let rows = (0..matrix.n_users())
            .map(|row| matrix.row_vector(row))
            .collect();

        debug!(rows = matrix.n_users(), dims = matrix.n_products(), "neighbor index fitted");

        Ok(Self {
            users: matrix.users().to_vec(),
            rows,
        })
    }

    /// Number of indexed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Search for the `k` rows closest to an arbitrary query vector.
    ///
    /// Returns at most `k` neighbors, closest first.
    #[must_use]
    pub fn search(&self, query: &Vector<f64>, k: usize) -> Vec<Neighbor> {
        self.rank(query, None, k)
    }

    /// Search for the `k` rows closest to indexed row `row`.
    ///
    /// The row itself is part of the result (distance 0) and always comes
    /// first. Returns an empty list if `row` is out of bounds.
    #[must_use]
    pub fn kneighbors_of(&self, row: usize, k: usize) -> Vec<Neighbor> {
        match self.rows.get(row) {
            Some(query) => self.rank(query, Some(row), k),
            None => Vec::new(),
        }
    }

    fn rank(&self, query: &Vector<f64>, own_row: Option<usize>, k: usize) -> Vec<Neighbor> {
        let mut results: Vec<Neighbor> = self
            .rows
            .iter()
            .zip(&self.users)
            .enumerate()
            .map(|(row, (vector, &user))| Neighbor {
                row,
                user,
                distance: if own_row == Some(row) {
                    0.0
                } else {
                    cosine_distance(query, vector)
                },
            })
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| (own_row != Some(a.row)).cmp(&(own_row != Some(b.row))))
                .then_with(|| a.row.cmp(&b.row))
        });

        results.truncate(k);
        results
    }
}

/// Compute cosine distance (1 - cosine similarity).
///
/// Returns values in [0, 2]:
/// - 0: identical direction
/// - 1: orthogonal
/// - 2: opposite direction
///
/// Zero-norm vectors and length mismatches yield `f64::INFINITY`.
#[must_use]
pub fn cosine_distance(a: &Vector<f64>, b: &Vector<f64>) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return f64::INFINITY;
    }

    let cos_sim = a.dot(b) / (norm_a * norm_b);
    1.0 - cos_sim.clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;
