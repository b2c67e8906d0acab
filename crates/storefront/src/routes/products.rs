//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use brightcart_core::{Product, ProductId};
use serde::Serialize;
use tracing::instrument;

use super::require_id;
use crate::error::{AppError, Result, product_breadcrumb};
use crate::state::AppState;

/// Response of a saved-flag toggle.
#[derive(Debug, Serialize)]
pub struct SavedToggleResponse {
    pub id: ProductId,
    pub is_saved: bool,
    pub saved_items_count: usize,
}

/// List every product with its current flags.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let store = state.store().read().await;
    Json(store.products().to_vec())
}

/// Show one product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let store = state.store().read().await;
    store
        .product(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Toggle the saved flag of a product.
#[instrument(skip(state))]
pub async fn toggle_saved(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<SavedToggleResponse>> {
    require_id(&id)?;

    let mut store = state.store().write().await;
    let is_saved = store.toggle_saved(&id)?;
    product_breadcrumb(
        "saved",
        if is_saved { "Saved product" } else { "Unsaved product" },
        &id,
    );

    Ok(Json(SavedToggleResponse {
        saved_items_count: store.saved_items_count(),
        id,
        is_saved,
    }))
}
