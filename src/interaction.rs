//! Interaction events linking users to products.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a storefront user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Identifier of a catalog product.
///
/// Identifiers are assigned in insertion order, so a larger id means a more
/// recently added product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of recorded interaction.
///
/// Both kinds weigh the same in the interaction matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Product page was viewed
    View,
    /// Product was bought
    Purchase,
}

impl InteractionKind {
    /// Get string name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Purchase => "purchase",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" => Some(Self::View),
            "purchase" | "buy" => Some(Self::Purchase),
            _ => None,
        }
    }
}

/// A single entry of the append-only interaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Acting user
    pub user: UserId,
    /// Product interacted with
    pub product: ProductId,
    /// What happened
    pub kind: InteractionKind,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl Interaction {
    /// Create a new interaction record
    #[must_use]
    pub fn new(user: UserId, product: ProductId, kind: InteractionKind, timestamp: u64) -> Self {
        Self {
            user,
            product,
            kind,
            timestamp,
        }
    }

    /// The (user, product) pair the aggregator consumes.
    #[must_use]
    pub fn pair(&self) -> (UserId, ProductId) {
        (self.user, self.product)
    }
}
