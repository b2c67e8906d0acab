//! Search route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use brightcart_core::Product;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search results. An empty `results` list means "No products found".
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Product>,
    pub count: usize,
}

/// Search products by title, description and short description.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let store = state.store().read().await;
    let results: Vec<Product> = store.search(&query.q).into_iter().cloned().collect();
    tracing::debug!(results = results.len(), "Search complete");

    Json(SearchResponse {
        count: results.len(),
        query: query.q,
        results,
    })
}
