//! Read-only persistence boundary consumed by the recommendation pipeline.
//!
//! The pipeline never writes interactions; it only reads the full log and
//! looks products up in the catalog. [`InMemoryStore`] implements both sides
//! for tests, the CLI and embedding applications.
//!
//! # Examples
//!
//! ```
//! use shoprec::store::{InMemoryStore, InteractionLog, ProductCatalog};
//! use shoprec::{InteractionKind, UserId};
//!
//! let mut store = InMemoryStore::new();
//! let mug = store.add_product("Mug", 800);
//! store.record_interaction(UserId(1), mug, InteractionKind::View, 0).expect("product exists");
//!
//! assert_eq!(store.fetch_all_interactions().expect("in memory").len(), 1);
//! assert_eq!(store.fetch_most_recent(5).expect("in memory")[0].id, mug);
//! ```

mod memory;
mod snapshot;

pub use memory::InMemoryStore;
pub use snapshot::StoreSnapshot;

use crate::catalog::Product;
use crate::error::Result;
use crate::interaction::{ProductId, UserId};
use std::collections::BTreeSet;

/// Source of the raw interaction log.
pub trait InteractionLog {
    /// Every recorded (user, product) pair, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecommendError::DataAccess`] if the log cannot be read.
    fn fetch_all_interactions(&self) -> Result<Vec<(UserId, ProductId)>>;

    /// Counter that increases whenever the log changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecommendError::DataAccess`] if the log cannot be read.
    fn version(&self) -> Result<u64>;
}

/// Product lookups used to materialize recommendations.
pub trait ProductCatalog {
    /// Products for the given ids in ascending id order; unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecommendError::DataAccess`] if the catalog cannot be read.
    fn fetch_products(&self, ids: &BTreeSet<ProductId>) -> Result<Vec<Product>>;

    /// At most `n` products ordered by descending id (newest first).
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecommendError::DataAccess`] if the catalog cannot be read.
    fn fetch_most_recent(&self, n: usize) -> Result<Vec<Product>>;
}

impl<T: InteractionLog + ?Sized> InteractionLog for &T {
    fn fetch_all_interactions(&self) -> Result<Vec<(UserId, ProductId)>> {
        (**self).fetch_all_interactions()
    }

    fn version(&self) -> Result<u64> {
        (**self).version()
    }
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for &T {
    fn fetch_products(&self, ids: &BTreeSet<ProductId>) -> Result<Vec<Product>> {
        (**self).fetch_products(ids)
    }

    fn fetch_most_recent(&self, n: usize) -> Result<Vec<Product>> {
        (**self).fetch_most_recent(n)
    }
}
