//! Recommender that reuses the interaction matrix between requests.
//!
//! The matrix is rebuilt only when [`InteractionLog::version`] reports a
//! change. Selection and resolution are the same functions the uncached
//! [`super::CollaborativeRecommender`] uses, so both always agree.

use super::collaborative::{resolve, select, Recommendations};
use super::matrix::{build_matrix, InteractionMatrix};
use crate::config::RecommenderConfig;
use crate::error::Result;
use crate::interaction::UserId;
use crate::store::{InteractionLog, ProductCatalog};
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedMatrix {
    version: u64,
    matrix: Option<InteractionMatrix>,
}

/// Collaborative recommender with a version-keyed matrix cache.
///
/// # Examples
///
/// ```
/// use shoprec::recommend::CachedRecommender;
/// use shoprec::store::InMemoryStore;
/// use shoprec::UserId;
///
/// let mut store = InMemoryStore::new();
/// store.add_product("Mug", 800);
///
/// let mut recommender = CachedRecommender::new(&store, &store);
/// assert!(recommender.recommend(UserId(1), 3).expect("in memory").is_empty());
/// assert_eq!(recommender.rebuilds(), 1);
///
/// recommender.recommend(UserId(2), 3).expect("in memory");
/// assert_eq!(recommender.rebuilds(), 1);
/// ```
#[derive(Debug)]
pub struct CachedRecommender<L, C> {
    log: L,
    catalog: C,
    config: RecommenderConfig,
    cached: Option<CachedMatrix>,
    rebuilds: u64,
}

impl<L: InteractionLog, C: ProductCatalog> CachedRecommender<L, C> {
    /// Create a recommender with an empty cache and default configuration.
    pub fn new(log: L, catalog: C) -> Self {
        Self {
            log,
            catalog,
            config: RecommenderConfig::default(),
            cached: None,
            rebuilds: 0,
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    /// How many times the matrix has been rebuilt.
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Drop the cached matrix; the next request rebuilds it.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Recommend at most `n` products for `user`.
    ///
    /// # Errors
    ///
    /// Only persistence failures are returned; sparse data falls back.
    pub fn recommend(&mut self, user: UserId, n: usize) -> Result<Recommendations> {
        let version = self.log.version()?;
        let stale = self.cached.as_ref().map_or(true, |c| c.version != version);

        if stale {
            let interactions = self.log.fetch_all_interactions()?;
            self.cached = Some(CachedMatrix {
                version,
                matrix: build_matrix(&interactions),
            });
            self.rebuilds += 1;
            debug!(version, rebuilds = self.rebuilds, "interaction matrix refreshed");
        }

        let matrix = self.cached.as_ref().and_then(|c| c.matrix.as_ref());
        let selection = select(matrix, user, n, &self.config);
        resolve(&self.catalog, user, selection, n)
    }
}
