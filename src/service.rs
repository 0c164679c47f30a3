//! Entry points used by the storefront.
//!
//! The home page calls [`home_page_recommendations`], which never fails;
//! the JSON API calls [`recommendations_endpoint`], which maps upstream
//! failures to a 500 response and everything else to a 200 with a JSON
//! array (possibly empty).

use crate::catalog::Product;
use crate::error::Result;
use crate::interaction::UserId;
use crate::recommend::CollaborativeRecommender;
use crate::store::{InteractionLog, ProductCatalog};
use serde::Serialize;
use tracing::{error, warn};

/// Number of products returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Error body message for failed API requests; details go to the log only.
pub const UNAVAILABLE_MESSAGE: &str = "recommendations are temporarily unavailable";

/// Recommend at most `n` products for `user`.
///
/// # Errors
///
/// Returns [`crate::RecommendError::DataAccess`] if the log or catalog
/// cannot be read. Sparse data is never an error.
///
/// # Examples
///
/// ```
/// use shoprec::service::get_user_recommendations;
/// use shoprec::store::InMemoryStore;
/// use shoprec::UserId;
///
/// let mut store = InMemoryStore::new();
/// store.add_product("Mug", 800);
///
/// // No interactions recorded at all: nothing to recommend.
/// let products = get_user_recommendations(&store, &store, UserId(1), 5).expect("in memory");
/// assert!(products.is_empty());
/// ```
pub fn get_user_recommendations<L, C>(
    log: &L,
    catalog: &C,
    user: UserId,
    n: usize,
) -> Result<Vec<Product>>
where
    L: InteractionLog + ?Sized,
    C: ProductCatalog + ?Sized,
{
    Ok(CollaborativeRecommender::new(log, catalog)
        .recommend(user, n)?
        .products)
}

/// Best-effort recommendations for the storefront home page.
///
/// Failures are logged and degrade to an empty list so the page still
/// renders without a recommendation section.
pub fn home_page_recommendations<L, C>(log: &L, catalog: &C, user: UserId) -> Vec<Product>
where
    L: InteractionLog + ?Sized,
    C: ProductCatalog + ?Sized,
{
    match get_user_recommendations(log, catalog, user, DEFAULT_RECOMMENDATIONS) {
        Ok(products) => products,
        Err(e) => {
            warn!(user = %user, error = %e, "recommendations unavailable for home page");
            Vec::new()
        }
    }
}

/// Framework-neutral HTTP response for the recommendations endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiResponse {
    /// 200 with a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the products cannot be encoded.
    pub fn products(products: &[Product]) -> Result<Self> {
        Ok(Self {
            status: 200,
            body: serde_json::to_string(products)?,
        })
    }

    /// 500 with `{"error": message}`.
    #[must_use]
    pub fn server_error(message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| r#"{"error":"internal server error"}"#.to_string());
        Self { status: 500, body }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `GET /api/recommendations/{user_id}/` handler body.
///
/// # Examples
///
/// ```
/// use shoprec::service::recommendations_endpoint;
/// use shoprec::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let response = recommendations_endpoint(&store, &store, 7);
/// assert_eq!(response.status, 200);
/// assert_eq!(response.body, "[]");
/// ```
pub fn recommendations_endpoint<L, C>(log: &L, catalog: &C, user_id: u64) -> ApiResponse
where
    L: InteractionLog + ?Sized,
    C: ProductCatalog + ?Sized,
{
    let user = UserId(user_id);
    let result = get_user_recommendations(log, catalog, user, DEFAULT_RECOMMENDATIONS)
        .and_then(|products| ApiResponse::products(&products));

    match result {
        Ok(response) => response,
        Err(e) => {
            error!(user = %user, error = %e, "recommendation request failed");
            ApiResponse::server_error(UNAVAILABLE_MESSAGE)
        }
    }
}
