//! Property-based tests using proptest.
//!
//! These tests verify invariants of matrix aggregation, neighbor search and
//! recommendation selection over arbitrary interaction logs.

use proptest::prelude::*;
use shoprec::prelude::*;
use shoprec::recommend::{build_matrix, cosine_distance, NeighborIndex};
use std::collections::BTreeSet;

const N_PRODUCTS: u64 = 12;

// Strategy for generating interaction logs over a small id space
fn log_strategy(max_len: usize) -> impl Strategy<Value = Vec<(UserId, ProductId)>> {
    proptest::collection::vec((0u64..8, 1u64..=N_PRODUCTS), 0..max_len).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(u, p)| (UserId(u), ProductId(p)))
            .collect()
    })
}

// Strategy for generating count vectors
fn counts_strategy(len: usize) -> impl Strategy<Value = Vector<f64>> {
    proptest::collection::vec(0u32..5, len)
        .prop_map(|v| Vector::from_vec(v.into_iter().map(f64::from).collect()))
}

fn store_from(log: &[(UserId, ProductId)]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    for i in 0..N_PRODUCTS {
        store.add_product(format!("Product {i}"), 100 * (i + 1));
    }
    for (ts, &(user, product)) in log.iter().enumerate() {
        store
            .record_interaction(user, product, InteractionKind::View, ts as u64)
            .expect("strategy only yields catalog products");
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Matrix properties
    #[test]
    fn matrix_labels_are_distinct_ids(log in log_strategy(40)) {
        match build_matrix(&log) {
            None => prop_assert!(log.is_empty()),
            Some(matrix) => {
                let users: BTreeSet<_> = log.iter().map(|&(u, _)| u).collect();
                let products: BTreeSet<_> = log.iter().map(|&(_, p)| p).collect();
                prop_assert_eq!(matrix.users().to_vec(), users.into_iter().collect::<Vec<_>>());
                prop_assert_eq!(matrix.products().to_vec(), products.into_iter().collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn matrix_total_matches_log_length(log in log_strategy(40)) {
        let total = build_matrix(&log).map_or(0, |m| m.total_interactions());
        prop_assert_eq!(total, log.len() as u64);
    }

    #[test]
    fn matrix_ignores_log_order(log in log_strategy(30)) {
        let mut reversed = log.clone();
        reversed.reverse();
        prop_assert_eq!(build_matrix(&log), build_matrix(&reversed));
    }

    // Distance properties
    #[test]
    fn cosine_distance_is_symmetric(a in counts_strategy(6), b in counts_strategy(6)) {
        let ab = cosine_distance(&a, &b);
        let ba = cosine_distance(&b, &a);
        prop_assert!(ab == ba || (ab - ba).abs() < 1e-12);
    }

    #[test]
    fn cosine_distance_in_range(a in counts_strategy(6), b in counts_strategy(6)) {
        let d = cosine_distance(&a, &b);
        prop_assert!(d.is_infinite() || (-1e-12..=1.0 + 1e-12).contains(&d));
    }

    #[test]
    fn own_row_ranks_first(log in log_strategy(40), k in 1usize..10) {
        if let Some(matrix) = build_matrix(&log) {
            let index = NeighborIndex::fit(&matrix).expect("non-empty matrix");
            for row in 0..index.len() {
                let neighbors = index.kneighbors_of(row, k);
                prop_assert_eq!(neighbors.len(), k.min(index.len()));
                prop_assert_eq!(neighbors[0].row, row);
                for pair in neighbors.windows(2) {
                    prop_assert!(pair[0].distance <= pair[1].distance);
                }
            }
        }
    }

    // Recommendation properties
    #[test]
    fn result_bounded_and_distinct(log in log_strategy(40), user in 0u64..10, n in 0usize..8) {
        let store = store_from(&log);
        let result = CollaborativeRecommender::new(&store, &store)
            .recommend(UserId(user), n)
            .expect("in memory");

        prop_assert!(result.len() <= n);
        let ids = result.ids();
        let distinct: BTreeSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(distinct.len(), ids.len());
    }

    #[test]
    fn collaborative_results_exclude_own_products(
        log in log_strategy(40),
        user in 0u64..8,
        n in 1usize..8,
    ) {
        let store = store_from(&log);
        let result = CollaborativeRecommender::new(&store, &store)
            .recommend(UserId(user), n)
            .expect("in memory");

        if result.source == RecommendationSource::Collaborative {
            let own: BTreeSet<_> = log
                .iter()
                .filter(|&&(u, _)| u == UserId(user))
                .map(|&(_, p)| p)
                .collect();
            prop_assert!(!result.is_empty());
            prop_assert!(result.ids().iter().all(|id| !own.contains(id)));
        }
    }

    #[test]
    fn cold_start_user_gets_newest(log in log_strategy(40), n in 0usize..15) {
        prop_assume!(!log.is_empty());
        let store = store_from(&log);
        // Users in the log are below 8.
        let ids = CollaborativeRecommender::new(&store, &store)
            .recommend_ids(UserId(100), n)
            .expect("in memory");

        let expected: Vec<_> = (1..=N_PRODUCTS).rev().take(n).map(ProductId).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn empty_log_gives_nothing(user in 0u64..10, n in 0usize..8) {
        let store = store_from(&[]);
        let result = CollaborativeRecommender::new(&store, &store)
            .recommend(UserId(user), n)
            .expect("in memory");
        prop_assert!(result.is_empty());
        prop_assert_eq!(result.source, RecommendationSource::NoData);
    }

    #[test]
    fn recommend_is_idempotent(log in log_strategy(40), user in 0u64..8, n in 0usize..8) {
        let store = store_from(&log);
        let recommender = CollaborativeRecommender::new(&store, &store);
        let first = recommender.recommend(UserId(user), n).expect("in memory");
        let second = recommender.recommend(UserId(user), n).expect("in memory");
        prop_assert_eq!(first, second);
    }
}
