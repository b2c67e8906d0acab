//! Cart route handlers.
//!
//! Each mutation answers with the full cart view so the client can redraw
//! the cart, the badge and the price summary from one response.

use axum::{
    Json,
    extract::{Path, State},
};
use brightcart_core::{CartEntry, Price, PriceError, ProductId, QuantityInput};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::require_id;
use crate::error::{Result, product_breadcrumb};
use crate::state::AppState;
use crate::store::{AddOutcome, Store};

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: Option<String>,
    pub image_url: String,
    pub quantity: u32,
    pub price: Price,
    pub line_total: Price,
    pub line_total_display: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub total_price: Price,
    pub total_display: String,
}

impl TryFrom<&CartEntry> for CartItemView {
    type Error = PriceError;

    fn try_from(entry: &CartEntry) -> std::result::Result<Self, Self::Error> {
        let line_total = entry.line_total()?;
        Ok(Self {
            id: entry.product.id.clone(),
            title: entry.product.title.clone(),
            image_url: entry.product.image_url.clone(),
            quantity: entry.quantity.get(),
            price: entry.product.price,
            line_total,
            line_total_display: line_total.display(),
        })
    }
}

/// Every line total is at most the store's total, which is already known to
/// be in range, so this only fails if that invariant is broken.
impl TryFrom<&Store> for CartView {
    type Error = PriceError;

    fn try_from(store: &Store) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            items: store
                .cart()
                .iter()
                .map(CartItemView::try_from)
                .collect::<std::result::Result<_, _>>()?,
            item_count: store.cart_item_count(),
            total_price: store.total_price(),
            total_display: store.total_price().display(),
        })
    }
}

/// Add/remove request body.
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    pub id: ProductId,
}

/// Set-quantity request body. `quantity` may be a number or a string.
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub id: ProductId,
    pub quantity: QuantityInput,
}

/// Add-to-cart response.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub outcome: AddOutcome,
    pub cart: CartView,
}

/// Remove-from-cart response.
#[derive(Debug, Serialize)]
pub struct RemoveFromCartResponse {
    pub removed: bool,
    pub cart: CartView,
}

/// Cart count badge.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub count: usize,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let store = state.store().read().await;
    Ok(Json(CartView::try_from(&*store)?))
}

/// Add a product to the cart.
///
/// Adding a product that is already in the cart succeeds without changes.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<AddToCartResponse>> {
    let id = require_id(&request.id)?;

    let mut store = state.store().write().await;
    let outcome = store.add_to_cart(id)?;
    if outcome == AddOutcome::Added {
        product_breadcrumb("cart", "Added to cart", id);
    }

    Ok(Json(AddToCartResponse {
        outcome,
        cart: CartView::try_from(&*store)?,
    }))
}

/// Remove a product from the cart.
///
/// Removing a product that is not in the cart succeeds with `removed: false`.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<RemoveFromCartResponse>> {
    let id = require_id(&request.id)?;

    let mut store = state.store().write().await;
    let removed = store.delete_from_cart(id)?.is_some();
    if removed {
        product_breadcrumb("cart", "Removed from cart", id);
    }

    Ok(Json(RemoveFromCartResponse {
        removed,
        cart: CartView::try_from(&*store)?,
    }))
}

/// Overwrite the quantity of a cart entry.
#[instrument(skip(state))]
pub async fn set_quantity(
    State(state): State<AppState>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<Json<CartView>> {
    let id = require_id(&request.id)?;

    let mut store = state.store().write().await;
    store.set_quantity(&request.quantity, id)?;
    Ok(Json(CartView::try_from(&*store)?))
}

/// Raise a cart entry's quantity by one.
#[instrument(skip(state))]
pub async fn increment(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let mut store = state.store().write().await;
    store.increment_qty(&id)?;
    Ok(Json(CartView::try_from(&*store)?))
}

/// Lower a cart entry's quantity by one, stopping at one.
#[instrument(skip(state))]
pub async fn decrement(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let mut store = state.store().write().await;
    store.decrement_qty(&id)?;
    Ok(Json(CartView::try_from(&*store)?))
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCountResponse> {
    let store = state.store().read().await;
    Json(CartCountResponse {
        count: store.cart_item_count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use brightcart_core::Quantity;

    use super::*;
    use crate::store::LogNotifier;

    #[test]
    fn test_cart_view_from_store() {
        let mut store = Store::initialize(Arc::new(LogNotifier));
        let id = ProductId::new("atomic-habits");
        store.add_to_cart(&id).unwrap();
        store.increment_qty(&id).unwrap();

        let view = CartView::try_from(&store).unwrap();
        assert_eq!(view.item_count, 1);
        assert_eq!(view.total_display, "$23.98");

        let item = view.items.first().unwrap();
        assert_eq!(item.quantity, Quantity::new(2).unwrap().get());
        assert_eq!(item.price, Price::from_cents(1199));
        assert_eq!(item.line_total_display, "$23.98");
    }

    #[test]
    fn test_empty_cart_view() {
        let store = Store::initialize(Arc::new(LogNotifier));
        let view = CartView::try_from(&store).unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.total_display, "$0.00");
    }
}
