//! User-based collaborative filtering with popularity fallbacks.
//!
//! The pipeline has three stages, each a plain function of the previous
//! stage's output:
//!
//! 1. [`build_matrix`] aggregates the interaction log.
//! 2. [`NeighborIndex::fit`] indexes the matrix rows.
//! 3. [`select`] picks candidates for one user, or names the fallback.
//!
//! [`CollaborativeRecommender`] wires the stages to a log and a catalog and
//! resolves the selection into products. Sparse data never produces an
//! error: every branch ends in a concrete, possibly empty, list.

use super::matrix::{build_matrix, InteractionMatrix};
use super::neighbors::NeighborIndex;
use crate::catalog::Product;
use crate::config::{CandidateOrder, RecommenderConfig};
use crate::error::Result;
use crate::interaction::{ProductId, UserId};
use crate::store::{InteractionLog, ProductCatalog};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Why collaborative filtering could not serve a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The user has no interactions (local cold start)
    UnknownUser,
    /// The user is the only row of the matrix
    NoNeighbors,
    /// Neighbors interacted with nothing the user has not already seen
    NoCandidates,
}

impl FallbackReason {
    /// Get string name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownUser => "unknown_user",
            Self::NoNeighbors => "no_neighbors",
            Self::NoCandidates => "no_candidates",
        }
    }
}

/// Outcome of the selection stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No interactions exist at all; return nothing
    Empty,
    /// Serve the newest catalog products instead
    Popular(FallbackReason),
    /// Every candidate, ordered, not yet truncated
    Candidates(Vec<ProductId>),
}

/// Which branch produced a [`Recommendations`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    /// Global cold start, the list is empty
    NoData,
    /// Newest products by descending id
    Popular(FallbackReason),
    /// Products drawn from similar users
    Collaborative,
}

/// Products recommended to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// At most `n` distinct products
    pub products: Vec<Product>,
    /// Branch that produced them
    pub source: RecommendationSource,
}

impl Recommendations {
    /// Product ids in result order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if nothing is recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Choose candidates for `user`, or the fallback that applies.
///
/// `matrix` is `None` for an empty interaction log. The neighbor query asks
/// for `min(n + padding, rows)` rows, drops the user's own row, and
/// subtracts the user's products from the union of the neighbors' products.
///
/// # Examples
///
/// ```
/// use shoprec::config::RecommenderConfig;
/// use shoprec::recommend::{build_matrix, select, FallbackReason, Selection};
/// use shoprec::{ProductId, UserId};
///
/// let log = vec![
///     (UserId(1), ProductId(1)),
///     (UserId(2), ProductId(1)),
///     (UserId(2), ProductId(2)),
/// ];
/// let matrix = build_matrix(&log);
/// let config = RecommenderConfig::default();
///
/// assert_eq!(
///     select(matrix.as_ref(), UserId(1), 5, &config),
///     Selection::Candidates(vec![ProductId(2)])
/// );
/// assert_eq!(
///     select(matrix.as_ref(), UserId(9), 5, &config),
///     Selection::Popular(FallbackReason::UnknownUser)
/// );
/// assert_eq!(select(None, UserId(1), 5, &config), Selection::Empty);
/// ```
#[must_use]
pub fn select(
    matrix: Option<&InteractionMatrix>,
    user: UserId,
    n: usize,
    config: &RecommenderConfig,
) -> Selection {
    let Some(matrix) = matrix else {
        return Selection::Empty;
    };

    let Some(row) = matrix.row_index(user) else {
        return Selection::Popular(FallbackReason::UnknownUser);
    };

    let Ok(index) = NeighborIndex::fit(matrix) else {
        return Selection::Empty;
    };

    // The query row always takes one slot of k.
    let padding = config.neighbor_padding.max(1);
    let k = n.saturating_add(padding).min(matrix.n_users());
    let neighbors: Vec<usize> = index
        .kneighbors_of(row, k)
        .into_iter()
        .skip(1) // the query row itself
        .map(|neighbor| neighbor.row)
        .collect();

    debug!(user = %user, k, neighbors = neighbors.len(), "neighbors selected");

    if neighbors.is_empty() {
        return Selection::Popular(FallbackReason::NoNeighbors);
    }

    let own = matrix.products_in_row(row);
    let mut support: BTreeMap<ProductId, u64> = BTreeMap::new();
    for &neighbor in &neighbors {
        for (&count, &product) in matrix
            .counts()
            .row_slice(neighbor)
            .iter()
            .zip(matrix.products())
        {
            if count > 0 && !own.contains(&product) {
                *support.entry(product).or_insert(0) += u64::from(count);
            }
        }
    }

    if support.is_empty() {
        return Selection::Popular(FallbackReason::NoCandidates);
    }

    Selection::Candidates(order_candidates(support, config.candidate_order))
}

fn order_candidates(support: BTreeMap<ProductId, u64>, order: CandidateOrder) -> Vec<ProductId> {
    match order {
        CandidateOrder::Ascending => support.into_keys().collect(),
        CandidateOrder::NeighborSupport => {
            let mut ranked: Vec<(ProductId, u64)> = support.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked.into_iter().map(|(product, _)| product).collect()
        }
    }
}

/// Turn a selection into at most `n` catalog products.
pub(crate) fn resolve<C: ProductCatalog>(
    catalog: &C,
    user: UserId,
    selection: Selection,
    n: usize,
) -> Result<Recommendations> {
    let recommendations = match selection {
        Selection::Empty => Recommendations {
            products: Vec::new(),
            source: RecommendationSource::NoData,
        },
        Selection::Popular(reason) => popular(catalog, reason, n)?,
        Selection::Candidates(candidates) => {
            let wanted: BTreeSet<ProductId> = candidates.iter().copied().collect();
            let mut found: BTreeMap<ProductId, Product> = catalog
                .fetch_products(&wanted)?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();
            let products: Vec<Product> = candidates
                .iter()
                .filter_map(|id| found.remove(id))
                .take(n)
                .collect();

            if products.is_empty() && n > 0 {
                popular(catalog, FallbackReason::NoCandidates, n)?
            } else {
                Recommendations {
                    products,
                    source: RecommendationSource::Collaborative,
                }
            }
        }
    };

    match recommendations.source {
        RecommendationSource::Popular(reason) => info!(
            user = %user,
            reason = reason.as_str(),
            count = recommendations.len(),
            "serving popular products"
        ),
        RecommendationSource::NoData => info!(user = %user, "no interactions recorded yet"),
        RecommendationSource::Collaborative => info!(
            user = %user,
            count = recommendations.len(),
            "serving collaborative recommendations"
        ),
    }

    Ok(recommendations)
}

fn popular<C: ProductCatalog>(
    catalog: &C,
    reason: FallbackReason,
    n: usize,
) -> Result<Recommendations> {
    Ok(Recommendations {
        products: catalog.fetch_most_recent(n)?,
        source: RecommendationSource::Popular(reason),
    })
}

/// Collaborative-filtering recommender over a log and a catalog.
///
/// Every call re-reads the log and rebuilds the matrix and index; see
/// [`super::CachedRecommender`] for a variant that reuses the matrix.
///
/// # Examples
///
/// ```
/// use shoprec::recommend::{CollaborativeRecommender, RecommendationSource};
/// use shoprec::store::InMemoryStore;
/// use shoprec::{InteractionKind, UserId};
///
/// let mut store = InMemoryStore::new();
/// let tea = store.add_product("Tea", 500);
/// let pot = store.add_product("Teapot", 3_000);
/// store.record_interaction(UserId(1), tea, InteractionKind::View, 0).expect("known product");
/// store.record_interaction(UserId(2), tea, InteractionKind::Purchase, 1).expect("known product");
/// store.record_interaction(UserId(2), pot, InteractionKind::Purchase, 2).expect("known product");
///
/// let recommender = CollaborativeRecommender::new(&store, &store);
/// let result = recommender.recommend(UserId(1), 5).expect("in-memory store");
///
/// assert_eq!(result.source, RecommendationSource::Collaborative);
/// assert_eq!(result.ids(), vec![pot]);
/// ```
#[derive(Debug, Clone)]
pub struct CollaborativeRecommender<L, C> {
    log: L,
    catalog: C,
    config: RecommenderConfig,
}

impl<L: InteractionLog, C: ProductCatalog> CollaborativeRecommender<L, C> {
    /// Create a recommender with the default configuration.
    pub fn new(log: L, catalog: C) -> Self {
        Self {
            log,
            catalog,
            config: RecommenderConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Read the log and aggregate it.
    ///
    /// # Errors
    ///
    /// Propagates interaction log failures.
    pub fn build_matrix(&self) -> Result<Option<InteractionMatrix>> {
        let interactions = self.log.fetch_all_interactions()?;
        Ok(build_matrix(&interactions))
    }

    /// Recommend at most `n` products for `user`.
    ///
    /// # Errors
    ///
    /// Only persistence failures are returned; sparse data falls back.
    pub fn recommend(&self, user: UserId, n: usize) -> Result<Recommendations> {
        let matrix = self.build_matrix()?;
        let selection = select(matrix.as_ref(), user, n, &self.config);
        resolve(&self.catalog, user, selection, n)
    }

    /// Recommend `config.default_count` products for `user`.
    ///
    /// # Errors
    ///
    /// Only persistence failures are returned; sparse data falls back.
    pub fn recommend_default(&self, user: UserId) -> Result<Recommendations> {
        self.recommend(user, self.config.default_count)
    }

    /// Recommend at most `n` product ids for `user`.
    ///
    /// # Errors
    ///
    /// Only persistence failures are returned; sparse data falls back.
    pub fn recommend_ids(&self, user: UserId, n: usize) -> Result<Vec<ProductId>> {
        Ok(self.recommend(user, n)?.ids())
    }
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;
