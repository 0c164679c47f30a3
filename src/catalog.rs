//! Catalog records returned to callers.

use crate::interaction::ProductId;
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// A product as served to the storefront and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Primary identifier (insertion ordered)
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units
    pub price_cents: u64,
    /// Units in stock
    #[serde(default)]
    pub stock: u32,
    /// Owning category, if any
    #[serde(default)]
    pub category: Option<u64>,
}

impl Product {
    /// Create a product with no description, stock or category
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price_cents,
            stock: 0,
            category: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set units in stock
    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Assign a category
    #[must_use]
    pub fn with_category(mut self, category: u64) -> Self {
        self.category = Some(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let product = Product::new(ProductId(4), "Lamp", 2_499)
            .with_description("desk lamp")
            .with_stock(12)
            .with_category(2);
        assert_eq!(product.id, ProductId(4));
        assert_eq!(product.description, "desk lamp");
        assert_eq!(product.stock, 12);
        assert_eq!(product.category, Some(2));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Mug","price_cents":800}"#).expect("parse");
        assert_eq!(product.id, ProductId(1));
        assert!(product.description.is_empty());
        assert_eq!(product.stock, 0);
        assert_eq!(product.category, None);
    }
}
