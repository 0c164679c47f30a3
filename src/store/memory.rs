//! In-memory interaction log and product catalog.

use super::{InteractionLog, ProductCatalog, StoreSnapshot};
use crate::catalog::{Category, Product};
use crate::error::{RecommendError, Result};
use crate::interaction::{Interaction, InteractionKind, ProductId, UserId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Store holding categories, products and the interaction log in memory.
///
/// Product ids start at 1 and grow with every insertion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    categories: Vec<Category>,
    products: BTreeMap<ProductId, Product>,
    interactions: Vec<Interaction>,
    version: u64,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::UnknownProduct`] if an interaction references
    /// a product missing from the snapshot, or [`RecommendError::Other`] on a
    /// duplicate product id.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let mut store = Self::new();
        store.categories = snapshot.categories;
        for product in snapshot.products {
            store.insert_product(product)?;
        }
        for interaction in snapshot.interactions {
            store.push_interaction(interaction)?;
        }
        debug!(
            products = store.products.len(),
            interactions = store.interactions.len(),
            "store loaded from snapshot"
        );
        Ok(store)
    }

    /// Copy the current state into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            categories: self.categories.clone(),
            products: self.products.values().cloned().collect(),
            interactions: self.interactions.clone(),
        }
    }

    /// Register a category and return its id.
    pub fn add_category(&mut self, name: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.categories.push(Category {
            id,
            name: name.into(),
            description: description.into(),
        });
        id
    }

    /// Add a product under the next free id.
    pub fn add_product(&mut self, name: impl Into<String>, price_cents: u64) -> ProductId {
        let id = self.next_product_id();
        self.products
            .insert(id, Product::new(id, name, price_cents));
        id
    }

    /// Insert a fully specified product.
    ///
    /// # Errors
    ///
    /// Returns an error if a product with the same id already exists.
    pub fn insert_product(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(&product.id) {
            return Err(format!("duplicate product id {}", product.id).into());
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Append an interaction to the log.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::UnknownProduct`] if `product` is not in the catalog.
    pub fn record_interaction(
        &mut self,
        user: UserId,
        product: ProductId,
        kind: InteractionKind,
        timestamp: u64,
    ) -> Result<()> {
        self.push_interaction(Interaction::new(user, product, kind, timestamp))
    }

    /// All categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products in ascending id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// The raw interaction log in append order.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    fn push_interaction(&mut self, interaction: Interaction) -> Result<()> {
        if !self.products.contains_key(&interaction.product) {
            return Err(RecommendError::UnknownProduct {
                id: interaction.product.0,
            });
        }
        self.interactions.push(interaction);
        self.version += 1;
        Ok(())
    }

    fn next_product_id(&self) -> ProductId {
        let last = self.products.keys().next_back().map_or(0, |id| id.0);
        ProductId(last + 1)
    }
}

impl InteractionLog for InMemoryStore {
    fn fetch_all_interactions(&self) -> Result<Vec<(UserId, ProductId)>> {
        Ok(self.interactions.iter().map(Interaction::pair).collect())
    }

    fn version(&self) -> Result<u64> {
        Ok(self.version)
    }
}

impl ProductCatalog for InMemoryStore {
    fn fetch_products(&self, ids: &BTreeSet<ProductId>) -> Result<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id))
            .cloned()
            .collect())
    }

    fn fetch_most_recent(&self, n: usize) -> Result<Vec<Product>> {
        Ok(self.products.values().rev().take(n).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n_products: usize) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for i in 0..n_products {
            store.add_product(format!("Product {i}"), 1_000);
        }
        store
    }

    #[test]
    fn test_product_ids_increase() {
        let mut store = InMemoryStore::new();
        let a = store.add_product("a", 1);
        let b = store.add_product("b", 1);
        assert_eq!(a, ProductId(1));
        assert_eq!(b, ProductId(2));
    }

    #[test]
    fn test_insert_product_then_add_continues_after_max() {
        let mut store = InMemoryStore::new();
        store
            .insert_product(Product::new(ProductId(40), "x", 1))
            .expect("fresh id");
        assert_eq!(store.add_product("y", 1), ProductId(41));
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut store = store_with(1);
        let result = store.insert_product(Product::new(ProductId(1), "dup", 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_record_unknown_product_rejected() {
        let mut store = store_with(1);
        let err = store
            .record_interaction(UserId(1), ProductId(99), InteractionKind::View, 0)
            .expect_err("product 99 does not exist");
        assert!(matches!(err, RecommendError::UnknownProduct { id: 99 }));
        assert_eq!(store.version().expect("in memory"), 0);
    }

    #[test]
    fn test_version_bumps_per_interaction() {
        let mut store = store_with(2);
        store
            .record_interaction(UserId(1), ProductId(1), InteractionKind::View, 0)
            .expect("valid");
        store
            .record_interaction(UserId(1), ProductId(2), InteractionKind::Purchase, 1)
            .expect("valid");
        assert_eq!(store.version().expect("in memory"), 2);
        assert_eq!(
            store.fetch_all_interactions().expect("in memory"),
            vec![(UserId(1), ProductId(1)), (UserId(1), ProductId(2))]
        );
    }

    #[test]
    fn test_fetch_most_recent_descending() {
        let store = store_with(5);
        let ids: Vec<_> = store
            .fetch_most_recent(3)
            .expect("in memory")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![ProductId(5), ProductId(4), ProductId(3)]);
    }

    #[test]
    fn test_fetch_most_recent_short_catalog() {
        let store = store_with(2);
        assert_eq!(store.fetch_most_recent(10).expect("in memory").len(), 2);
        assert!(store.fetch_most_recent(0).expect("in memory").is_empty());
    }

    #[test]
    fn test_fetch_products_skips_unknown() {
        let store = store_with(3);
        let ids: BTreeSet<_> = [ProductId(3), ProductId(1), ProductId(77)].into_iter().collect();
        let found: Vec<_> = store
            .fetch_products(&ids)
            .expect("in memory")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(found, vec![ProductId(1), ProductId(3)]);
    }

    #[test]
    fn test_categories() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.add_category("Kitchen", ""), 1);
        assert_eq!(store.add_category("Garden", "outdoor"), 2);
        assert_eq!(store.categories().len(), 2);
    }

    #[test]
    fn test_snapshot_rebuild() {
        let mut store = store_with(2);
        store
            .record_interaction(UserId(4), ProductId(2), InteractionKind::View, 10)
            .expect("valid");

        let rebuilt = InMemoryStore::from_snapshot(store.snapshot()).expect("consistent");
        assert_eq!(rebuilt.products().count(), 2);
        assert_eq!(rebuilt.interactions(), store.interactions());
        assert_eq!(rebuilt.version().expect("in memory"), 1);
    }
}
