//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::StorefrontConfig;
use crate::store::{Catalog, CatalogError, Store, ToastQueue};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is the application root's
/// single owner of the [`Store`]; handlers reach the store only through it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Store>,
    toasts: Arc<ToastQueue>,
}

impl AppState {
    /// Create application state, loading the catalog named by the config or
    /// falling back to the compiled-in mock catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::mock(),
        };
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create application state over an explicit catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let toasts = Arc::new(ToastQueue::new(config.notification_capacity));
        let store = Store::with_catalog(catalog, toasts.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
                toasts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the store lock.
    ///
    /// Hold the write guard for the whole mutation so derived values are
    /// recomputed before any reader sees the change.
    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }

    /// Get the pending toast queue.
    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.inner.toasts
    }
}
