//! Integration tests for Brightcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brightcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_scenarios` - Store mutators driven through whole shopping sessions
//! - `storefront_http` - The JSON API, exercised in-process with `oneshot`
//!
//! Nothing here binds a port; the router is called directly.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use brightcart_core::{CartEntry, Price};
use brightcart_storefront::config::StorefrontConfig;
use brightcart_storefront::state::AppState;
use brightcart_storefront::store::{Catalog, LogNotifier, Store};
use serde_json::Value;
use tower::ServiceExt;

/// Two products, one priced as a number and one as a numeric string.
pub const TWO_PRODUCT_CATALOG: &str = r#"[
    {"id": "A", "imageUrl": "/images/a.jpg", "title": "Alpha", "price": 10},
    {"id": "B", "imageUrl": "/images/b.jpg", "title": "Beta", "price": "20"}
]"#;

/// Catalog built from [`TWO_PRODUCT_CATALOG`].
#[must_use]
pub fn two_product_catalog() -> Catalog {
    Catalog::from_json(TWO_PRODUCT_CATALOG).unwrap()
}

/// One product priced near the top of the decimal range, so a large quantity
/// pushes its line total out of range.
pub const HUGE_PRICE_CATALOG: &str = r#"[
    {"id": "H", "imageUrl": "/images/h.jpg", "title": "Heavy", "price": "50000000000000000000"}
]"#;

/// Catalog built from [`HUGE_PRICE_CATALOG`].
#[must_use]
pub fn huge_price_catalog() -> Catalog {
    Catalog::from_json(HUGE_PRICE_CATALOG).unwrap()
}

/// Store over the two-product catalog, logging notifications.
#[must_use]
pub fn two_product_store() -> Store {
    Store::with_catalog(two_product_catalog(), Arc::new(LogNotifier))
}

/// Recompute the cart total from the entries, independent of the store.
#[must_use]
pub fn expected_total(store: &Store) -> Price {
    Price::try_sum(store.cart().iter().map(CartEntry::line_total)).unwrap()
}

/// Router and state over `catalog` with default configuration.
#[must_use]
pub fn test_app(catalog: Catalog) -> (Router, AppState) {
    let state = AppState::with_catalog(StorefrontConfig::default(), catalog);
    (brightcart_storefront::app(state.clone()), state)
}

/// Send one request and decode the response body.
///
/// JSON bodies are parsed; anything else comes back as a JSON string so
/// error messages can be asserted on too.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}
