//! Whole-state and notification handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::state::AppState;
use crate::store::{Notification, StoreSnapshot};

/// Full store snapshot for rendering.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<StoreSnapshot> {
    Json(state.store().read().await.snapshot())
}

/// Drain pending toasts, oldest first.
#[instrument(skip(state))]
pub async fn notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.toasts().drain())
}
