//! Seeded sample data for demos, tests and benchmarks.
//!
//! Mirrors the storefront's bootstrap script: a handful of users, each
//! interacting with a random sample of distinct products.

use crate::error::{RecommendError, Result};
use crate::interaction::{InteractionKind, UserId};
use crate::store::InMemoryStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// First timestamp handed out to generated interactions.
const BASE_TIMESTAMP: u64 = 1_700_000_000;

/// Shape of the generated data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulateConfig {
    /// Number of users (ids `1..=n_users`)
    pub n_users: usize,
    /// Number of products (ids `1..=n_products`)
    pub n_products: usize,
    /// Distinct products each user interacts with
    pub per_user: usize,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            n_users: 5,
            n_products: 10,
            per_user: 5,
            seed: 42,
        }
    }
}

impl PopulateConfig {
    /// Set the number of users.
    #[must_use]
    pub fn with_users(mut self, n_users: usize) -> Self {
        self.n_users = n_users;
        self
    }

    /// Set the number of products.
    #[must_use]
    pub fn with_products(mut self, n_products: usize) -> Self {
        self.n_products = n_products;
        self
    }

    /// Set the per-user sample size.
    #[must_use]
    pub fn with_per_user(mut self, per_user: usize) -> Self {
        self.per_user = per_user;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Build a store populated according to `config`.
///
/// # Errors
///
/// Returns [`RecommendError::InvalidHyperparameter`] if `per_user` exceeds
/// `n_products`.
///
/// # Examples
///
/// ```
/// use shoprec::synthetic::{populate, PopulateConfig};
///
/// let store = populate(&PopulateConfig::default()).expect("valid config");
/// assert_eq!(store.products().count(), 10);
/// assert_eq!(store.interactions().len(), 25);
/// ```
pub fn populate(config: &PopulateConfig) -> Result<InMemoryStore> {
    if config.per_user > config.n_products {
        return Err(RecommendError::InvalidHyperparameter {
            param: "per_user".to_string(),
            value: config.per_user.to_string(),
            constraint: format!("<= n_products ({})", config.n_products),
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut store = InMemoryStore::new();

    let products: Vec<_> = (0..config.n_products)
        .map(|i| {
            let price_units: u64 = rng.gen_range(10..=100);
            store.add_product(format!("Product {i}"), price_units * 100)
        })
        .collect();

    let mut timestamp = BASE_TIMESTAMP;
    for u in 1..=config.n_users {
        let user = UserId(u as u64);
        let sample: Vec<_> = products
            .choose_multiple(&mut rng, config.per_user)
            .copied()
            .collect();
        for product in sample {
            let kind = if rng.gen_bool(0.5) {
                InteractionKind::View
            } else {
                InteractionKind::Purchase
            };
            store.record_interaction(user, product, kind, timestamp)?;
            timestamp += 1;
        }
    }

    debug!(
        users = config.n_users,
        products = config.n_products,
        per_user = config.per_user,
        seed = config.seed,
        "sample store populated"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ProductId;
    use std::collections::BTreeSet;

    #[test]
    fn test_default_shape() {
        let store = populate(&PopulateConfig::default()).expect("valid config");
        assert_eq!(store.products().count(), 10);
        assert_eq!(store.interactions().len(), 25);
    }

    #[test]
    fn test_prices_in_range() {
        let store = populate(&PopulateConfig::default()).expect("valid config");
        for product in store.products() {
            assert!((1_000..=10_000).contains(&product.price_cents));
            assert_eq!(product.price_cents % 100, 0);
        }
    }

    #[test]
    fn test_samples_are_distinct_per_user() {
        let store = populate(&PopulateConfig::default()).expect("valid config");
        for u in 1..=5 {
            let products: Vec<ProductId> = store
                .interactions()
                .iter()
                .filter(|i| i.user == UserId(u))
                .map(|i| i.product)
                .collect();
            let distinct: BTreeSet<_> = products.iter().copied().collect();
            assert_eq!(products.len(), 5);
            assert_eq!(distinct.len(), 5);
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let config = PopulateConfig::default().with_seed(7);
        let a = populate(&config).expect("valid config");
        let b = populate(&config).expect("valid config");
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_different_seed_different_data() {
        let a = populate(&PopulateConfig::default().with_seed(1)).expect("valid config");
        let b = populate(&PopulateConfig::default().with_seed(2)).expect("valid config");
        assert_ne!(a.interactions(), b.interactions());
    }

    #[test]
    fn test_per_user_too_large() {
        let config = PopulateConfig::default().with_products(3).with_per_user(4);
        let err = populate(&config).expect_err("cannot sample 4 of 3");
        assert!(err.to_string().contains("per_user"));
    }

    #[test]
    fn test_empty_population() {
        let config = PopulateConfig::default().with_users(0).with_products(0).with_per_user(0);
        let store = populate(&config).expect("valid config");
        assert_eq!(store.products().count(), 0);
        assert!(store.interactions().is_empty());
    }
}
