//! Brightcart Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused. The binary in `main.rs` only adds
//! process setup (configuration, logging, Sentry, signal handling).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod services;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the storefront router with tracing and request-id middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The store is in memory, so there
/// are no dependencies to check.
async fn health() -> &'static str {
    "ok"
}
