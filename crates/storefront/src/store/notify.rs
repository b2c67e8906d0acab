//! Transient user-facing notifications ("toasts").
//!
//! The store emits a notification when a product is added to the cart. Where
//! it goes is up to the injected [`Notifier`]: the HTTP surface queues them in
//! a [`ToastQueue`] for the client to drain, the CLI just logs them.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use brightcart_core::Product;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How long an add-to-cart toast stays on screen.
pub const ADD_TO_CART_DURATION: Duration = Duration::from_millis(1500);

/// Title of the add-to-cart toast.
pub const ADD_TO_CART_TITLE: &str = "Product successfully added to your cart";

/// Severity of a notification. Only success toasts exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Success,
}

/// A transient message shown to the shopper.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: NotificationStatus,
    pub duration_ms: u64,
    pub is_closable: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// The toast shown after a product lands in the cart.
    #[must_use]
    pub fn added_to_cart(product: &Product) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: ADD_TO_CART_TITLE.to_string(),
            description: product.title.clone(),
            status: NotificationStatus::Success,
            duration_ms: u64::try_from(ADD_TO_CART_DURATION.as_millis()).unwrap_or(u64::MAX),
            is_closable: true,
            created_at: Utc::now(),
        }
    }
}

/// Sink for notifications. Fire and forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = ?notification.description,
            "Notification"
        );
    }
}

/// Bounded queue of pending toasts; the oldest is dropped when full.
#[derive(Debug)]
pub struct ToastQueue {
    capacity: usize,
    pending: Mutex<VecDeque<Notification>>,
}

impl ToastQueue {
    /// Create a queue holding at most `capacity` toasts (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Take every pending toast, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        let Ok(mut pending) = self.pending.lock() else {
            tracing::warn!("Toast queue lock poisoned, nothing to drain");
            return Vec::new();
        };
        pending.drain(..).collect()
    }

    /// Number of pending toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        let Ok(pending) = self.pending.lock() else {
            tracing::warn!("Toast queue lock poisoned, reporting empty");
            return 0;
        };
        pending.len()
    }

    /// Whether no toasts are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        let Ok(mut pending) = self.pending.lock() else {
            tracing::warn!("Toast queue lock poisoned, dropping notification");
            return;
        };
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(notification);
    }
}
