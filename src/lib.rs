//! Shoprec: collaborative-filtering product recommendations for a storefront.
//!
//! Shoprec turns a log of user/product interactions into product
//! recommendations. Users who interacted with similar products are treated
//! as neighbors, and each user is offered what their neighbors touched and
//! they have not. Cold-start users get the newest catalog products instead.
//!
//! # Quick Start
//!
//! ```
//! use shoprec::prelude::*;
//!
//! let mut store = InMemoryStore::new();
//! let tea = store.add_product("Green tea", 600);
//! let pot = store.add_product("Teapot", 3_500);
//! let cup = store.add_product("Cup", 900);
//!
//! store.record_interaction(UserId(1), tea, InteractionKind::View, 1).unwrap();
//! store.record_interaction(UserId(2), tea, InteractionKind::Purchase, 2).unwrap();
//! store.record_interaction(UserId(2), pot, InteractionKind::Purchase, 3).unwrap();
//!
//! let recommender = CollaborativeRecommender::new(&store, &store);
//! let result = recommender.recommend(UserId(1), 5).unwrap();
//! assert_eq!(result.ids(), vec![pot]);
//!
//! // A user with no history gets the newest products.
//! let result = recommender.recommend(UserId(3), 2).unwrap();
//! assert_eq!(result.ids(), vec![cup, pot]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`interaction`]: User and product ids, interaction records
//! - [`catalog`]: Products and categories
//! - [`store`]: Interaction log and catalog traits, in-memory store, JSON snapshots
//! - [`recommend`]: Interaction matrix, neighbor index, selection and recommenders
//! - [`config`]: Recommender configuration
//! - [`service`]: Storefront entry points (home page, JSON endpoint)
//! - [`synthetic`]: Seeded sample data

pub mod catalog;
pub mod config;
pub mod error;
pub mod interaction;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod service;
pub mod store;
pub mod synthetic;

pub use catalog::{Category, Product};
pub use error::{RecommendError, Result};
pub use interaction::{Interaction, InteractionKind, ProductId, UserId};
