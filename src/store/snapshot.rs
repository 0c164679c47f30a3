//! JSON file format for a whole store.

use crate::catalog::{Category, Product};
use crate::error::Result;
use crate::interaction::Interaction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable contents of an [`super::InMemoryStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Product categories
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Catalog products
    #[serde(default)]
    pub products: Vec<Product>,
    /// Interaction log in append order
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl StoreSnapshot {
    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecommendError::Serialization`] on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a serialization
    /// error if it is not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Write the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
