//! User-item interaction matrix.
//!
//! Counts every (user, product) pair of the log into a dense matrix whose
//! rows are the distinct users and whose columns are the distinct products,
//! both in ascending id order. Views and purchases weigh the same.

use crate::interaction::{ProductId, UserId};
use crate::primitives::{Matrix, Vector};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Dense user x product count matrix with explicit row and column labels.
///
/// # Examples
///
/// ```
/// use shoprec::recommend::build_matrix;
/// use shoprec::{ProductId, UserId};
///
/// let log = vec![
///     (UserId(2), ProductId(10)),
///     (UserId(1), ProductId(10)),
///     (UserId(2), ProductId(10)),
/// ];
/// let matrix = build_matrix(&log).expect("log is not empty");
///
/// assert_eq!(matrix.users(), &[UserId(1), UserId(2)]);
/// assert_eq!(matrix.count(UserId(2), ProductId(10)), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionMatrix {
    users: Vec<UserId>,
    products: Vec<ProductId>,
    counts: Matrix<u32>,
}

/// Aggregate a raw interaction log.
///
/// Returns `None` when the log is empty: there is no matrix to speak of and
/// callers must treat it as a global cold start.
#[must_use]
pub fn build_matrix(interactions: &[(UserId, ProductId)]) -> Option<InteractionMatrix> {
    if interactions.is_empty() {
        return None;
    }

    let mut cells: BTreeMap<(UserId, ProductId), u32> = BTreeMap::new();
    for &(user, product) in interactions {
        *cells.entry((user, product)).or_insert(0) += 1;
    }

    let users: Vec<UserId> = cells
        .keys()
        .map(|&(u, _)| u)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let products: Vec<ProductId> = cells
        .keys()
        .map(|&(_, p)| p)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = Matrix::zeros(users.len(), products.len());
    for (&(user, product), &count) in &cells {
        // Both label vectors are sorted and contain every key.
        let (Ok(row), Ok(col)) = (users.binary_search(&user), products.binary_search(&product))
        else {
            continue;
        };
        counts.set(row, col, count);
    }

    debug!(
        users = users.len(),
        products = products.len(),
        interactions = interactions.len(),
        "interaction matrix built"
    );

    Some(InteractionMatrix::from_parts(users, products, counts))
}

impl InteractionMatrix {
    pub(crate) fn from_parts(
        users: Vec<UserId>,
        products: Vec<ProductId>,
        counts: Matrix<u32>,
    ) -> Self {
        debug_assert_eq!(counts.shape(), (users.len(), products.len()));
        Self {
            users,
            products,
            counts,
        }
    }

    /// Number of rows (distinct users).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.counts.n_rows()
    }

    /// Number of columns (distinct products).
    #[must_use]
    pub fn n_products(&self) -> usize {
        self.counts.n_cols()
    }

    /// Row labels, ascending.
    #[must_use]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Column labels, ascending.
    #[must_use]
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Underlying count matrix.
    #[must_use]
    pub fn counts(&self) -> &Matrix<u32> {
        &self.counts
    }

    /// Row position of `user`, if the user has any interaction.
    #[must_use]
    pub fn row_index(&self, user: UserId) -> Option<usize> {
        self.users.binary_search(&user).ok()
    }

    /// Column position of `product`, if anyone interacted with it.
    #[must_use]
    pub fn column_index(&self, product: ProductId) -> Option<usize> {
        self.products.binary_search(&product).ok()
    }

    /// Interaction count for a cell; zero for unknown labels.
    #[must_use]
    pub fn count(&self, user: UserId, product: ProductId) -> u32 {
        match (self.row_index(user), self.column_index(product)) {
            (Some(row), Some(col)) => self.counts.get(row, col),
            _ => 0,
        }
    }

    /// Row `row` as a feature vector for the neighbor index.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row_vector(&self, row: usize) -> Vector<f64> {
        self.counts.row_f64(row)
    }

    /// Products with a non-zero count in row `row`.
    #[must_use]
    pub fn products_in_row(&self, row: usize) -> BTreeSet<ProductId> {
        self.counts
            .row_slice(row)
            .iter()
            .zip(&self.products)
            .filter(|(c, _)| **c > 0)
            .map(|(_, &p)| p)
            .collect()
    }

    /// Products `user` has interacted with; empty for unknown users.
    #[must_use]
    pub fn products_of(&self, user: UserId) -> BTreeSet<ProductId> {
        self.row_index(user)
            .map(|row| self.products_in_row(row))
            .unwrap_or_default()
    }

    /// Total number of interactions aggregated.
    #[must_use]
    pub fn total_interactions(&self) -> u64 {
        self.counts.total()
    }
}
