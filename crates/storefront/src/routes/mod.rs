//! HTTP route handlers for storefront.
//!
//! Every handler returns JSON built from a read of the shared [`Store`]
//! (`crate::store::Store`). Mutating handlers hold the write lock for the
//! whole operation and answer with the post-mutation view.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//!
//! # Products
//! GET  /products                 - Product listing
//! GET  /products/{id}            - Product detail
//! POST /products/{id}/saved      - Toggle saved flag
//! GET  /saved                    - Saved products and count
//! GET  /search?q=                - Search by title/description
//!
//! # Cart
//! GET  /cart                     - Cart view (entries, count, total)
//! POST /cart/add                 - Add to cart {"id"}
//! POST /cart/remove              - Remove from cart {"id"}
//! POST /cart/quantity            - Set quantity {"id", "quantity"}
//! POST /cart/{id}/increment      - Quantity + 1
//! POST /cart/{id}/decrement      - Quantity - 1 (stops at 1)
//! GET  /cart/count               - Cart count badge
//!
//! # State
//! GET  /state                    - Full store snapshot
//! GET  /notifications            - Drain pending toasts
//! ```

pub mod cart;
pub mod products;
pub mod saved;
pub mod search;
pub mod snapshot;

use axum::{
    Router,
    routing::{get, post},
};
use brightcart_core::ProductId;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/saved", post(products::toggle_saved))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/quantity", post(cart::set_quantity))
        .route("/{id}/increment", post(cart::increment))
        .route("/{id}/decrement", post(cart::decrement))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/saved", get(saved::index))
        .route("/search", get(search::search))
        .nest("/cart", cart_routes())
        .route("/state", get(snapshot::show))
        .route("/notifications", get(snapshot::notifications))
}

/// Reject blank product ids before touching the store.
fn require_id(id: &ProductId) -> Result<&ProductId> {
    if id.as_str().trim().is_empty() {
        return Err(AppError::BadRequest("product id is required".to_string()));
    }
    Ok(id)
}
