//! Saved-items route handlers.

use axum::{Json, extract::State};
use brightcart_core::Product;
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Saved products and their count.
#[derive(Debug, Serialize)]
pub struct SavedView {
    pub items: Vec<Product>,
    pub count: usize,
}

/// List saved products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<SavedView> {
    let store = state.store().read().await;
    Json(SavedView {
        items: store.saved_products().cloned().collect(),
        count: store.saved_items_count(),
    })
}
