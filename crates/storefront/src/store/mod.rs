//! The storefront state container.
//!
//! [`Store`] owns the catalog, the cart and the saved-items index. Callers
//! read through accessors or a [`StoreSnapshot`] and change state only
//! through the mutators below. Every mutator recomputes the derived values
//! (`total_price`, `saved_items_count`) before it returns, so a read that
//! follows a mutation is never stale.
//!
//! # Cart model
//!
//! The cart holds owned copies of product data. The catalog's `in_cart` flag
//! is a mirror of cart membership, set on add and cleared on delete.
//!
//! # Input handling
//!
//! - Unknown ids are reported as [`StoreError::UnknownProduct`] /
//!   [`StoreError::NotInCart`] instead of being silently absorbed.
//! - Quantities are validated; zero, negative and non-numeric input is
//!   rejected and the entry is left unchanged.
//! - Decrementing stops at one. Removing an entry is an explicit delete.
//! - Totals use checked decimal arithmetic. A change whose total would leave
//!   the decimal range is refused before anything is written.
//! - The cart item count is the number of entries, so it cannot go negative.

mod cart;
mod catalog;
mod mock;
mod notify;
mod saved;

use std::sync::Arc;

use brightcart_core::{
    CartEntry, Price, Product, ProductId, Quantity, QuantityError, QuantityInput,
};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogError};
pub use notify::{
    ADD_TO_CART_DURATION, ADD_TO_CART_TITLE, LogNotifier, Notification, NotificationStatus,
    Notifier, ToastQueue,
};
pub use saved::SavedIndex;

use crate::search;

/// Errors returned by store mutators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No catalog product has this id.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The product has no cart entry.
    #[error("product not in cart: {0}")]
    NotInCart(ProductId),

    /// The requested quantity is not a positive whole number, or would push
    /// the cart total out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Adding the product would push the cart total out of range.
    #[error("cart total out of range after adding {0}")]
    TotalOutOfRange(ProductId),
}

/// Result of [`Store::add_to_cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new quantity-one entry was created.
    Added,
    /// The product was already in the cart; nothing changed.
    AlreadyInCart,
}

/// Immutable copy of the whole store, for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub products: Vec<Product>,
    pub cart: Vec<CartEntry>,
    pub cart_item_count: usize,
    pub total_price: Price,
    pub saved_items_count: usize,
}

/// Catalog, cart and saved-items state for one shopper.
pub struct Store {
    catalog: Catalog,
    cart: Cart,
    saved: SavedIndex,
    notifier: Arc<dyn Notifier>,
    total_price: Price,
    saved_items_count: usize,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("products", &self.catalog.len())
            .field("cart_item_count", &self.cart.len())
            .field("total_price", &self.total_price)
            .field("saved_items_count", &self.saved_items_count)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Create a store seeded with the compiled-in mock catalog.
    #[must_use]
    pub fn initialize(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_catalog(Catalog::mock(), notifier)
    }

    /// Create a store over an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            cart: Cart::default(),
            saved: SavedIndex::default(),
            notifier,
            total_price: Price::ZERO,
            saved_items_count: 0,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// All catalog products with their current flags.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up one product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Cart entries in the order they were added.
    #[must_use]
    pub fn cart(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    /// The cart entry for a product, if any.
    #[must_use]
    pub fn cart_entry(&self, id: &ProductId) -> Option<&CartEntry> {
        self.cart.get(id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn cart_item_count(&self) -> usize {
        self.cart.len()
    }

    /// Sum of `price × quantity` over the cart.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.total_price
    }

    /// Number of products currently saved.
    #[must_use]
    pub const fn saved_items_count(&self) -> usize {
        self.saved_items_count
    }

    /// Products currently marked saved, in catalog order.
    pub fn saved_products(&self) -> impl Iterator<Item = &Product> {
        self.products().iter().filter(|p| p.is_saved)
    }

    /// Products whose title, description or short description contain
    /// `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        search::search_products(self.products(), query)
    }

    /// Copy the entire state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            products: self.products().to_vec(),
            cart: self.cart().to_vec(),
            cart_item_count: self.cart_item_count(),
            total_price: self.total_price,
            saved_items_count: self.saved_items_count,
        }
    }

    // =========================================================================
    // Saved items
    // =========================================================================

    /// Flip the saved flag of a product and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the catalog;
    /// nothing is recorded in that case.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn toggle_saved(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownProduct(id.clone()))?;
        let is_saved = self.saved.toggle(id);
        product.is_saved = is_saved;
        self.recompute_saved_items_count();

        tracing::debug!(is_saved, saved_items_count = self.saved_items_count, "Saved toggled");
        Ok(is_saved)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Put a product in the cart with quantity one.
    ///
    /// Adding a product that is already in the cart changes nothing; use
    /// [`Self::increment_qty`] to raise its quantity. A success notification
    /// is emitted only when an entry is created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the catalog,
    /// or [`StoreError::TotalOutOfRange`] if its price cannot be added to the
    /// total. Nothing changes on error.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<AddOutcome, StoreError> {
        if self.cart.contains(id) {
            tracing::debug!("Product already in cart");
            return Ok(AddOutcome::AlreadyInCart);
        }

        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownProduct(id.clone()))?;
        let total_price = self.total_price.checked_add(product.price).map_err(|e| {
            tracing::warn!(error = %e, "Rejected add");
            StoreError::TotalOutOfRange(id.clone())
        })?;

        product.in_cart = true;
        let copy = product.clone();
        let notification = Notification::added_to_cart(&copy);
        self.cart.insert(copy);
        self.total_price = total_price;

        tracing::info!(
            cart_item_count = self.cart.len(),
            total_price = %self.total_price,
            "Added to cart"
        );
        self.notifier.notify(notification);
        Ok(AddOutcome::Added)
    }

    /// Remove a product's entry from the cart and clear its `in_cart` flag.
    ///
    /// Returns the removed entry, or `None` if the product was not in the
    /// cart (in which case nothing changes).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TotalOutOfRange`] if the remaining total cannot
    /// be computed. The cart is unchanged in that case.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn delete_from_cart(
        &mut self,
        id: &ProductId,
    ) -> Result<Option<CartEntry>, StoreError> {
        if !self.cart.contains(id) {
            tracing::debug!("Delete of product not in cart ignored");
            return Ok(None);
        }
        let total_price = self
            .cart
            .total_without(id)
            .map_err(|_| StoreError::TotalOutOfRange(id.clone()))?;

        let removed = self.cart.remove(id);
        if let Some(product) = self.catalog.get_mut(id) {
            product.in_cart = false;
        }
        self.total_price = total_price;

        tracing::info!(
            cart_item_count = self.cart.len(),
            total_price = %self.total_price,
            "Removed from cart"
        );
        Ok(removed)
    }

    /// Overwrite the quantity of a cart entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidQuantity`] for anything but a positive
    /// whole number or for a quantity whose line total is out of range, or
    /// [`StoreError::NotInCart`] if the product has no entry. The entry is
    /// unchanged on error.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn set_quantity(
        &mut self,
        quantity: &QuantityInput,
        id: &ProductId,
    ) -> Result<Quantity, StoreError> {
        let quantity = quantity.parse().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected quantity");
        })?;
        self.update_quantity(id, |_| Ok(quantity))
    }

    /// Add one unit to a cart entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInCart`] if the product has no entry, or
    /// [`StoreError::InvalidQuantity`] if the new quantity is out of range.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn increment_qty(&mut self, id: &ProductId) -> Result<Quantity, StoreError> {
        self.update_quantity(id, |current| current.incremented().map_err(Into::into))
    }

    /// Remove one unit from a cart entry, stopping at one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInCart`] if the product has no entry.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn decrement_qty(&mut self, id: &ProductId) -> Result<Quantity, StoreError> {
        self.update_quantity(id, |current| {
            if current == Quantity::ONE {
                tracing::debug!("Quantity already at minimum");
            }
            Ok(current.decremented())
        })
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    fn update_quantity<F>(&mut self, id: &ProductId, f: F) -> Result<Quantity, StoreError>
    where
        F: FnOnce(Quantity) -> Result<Quantity, StoreError>,
    {
        let current = self
            .cart
            .get(id)
            .ok_or_else(|| StoreError::NotInCart(id.clone()))?
            .quantity;
        let quantity = f(current)?;
        let total_price = self.cart.total_with(id, quantity).map_err(|e| {
            tracing::warn!(error = %e, %quantity, "Rejected quantity");
            QuantityError::TooLarge(quantity.to_string())
        })?;

        // Commit only once the new total is known
        if let Some(entry) = self.cart.get_mut(id) {
            entry.quantity = quantity;
        }
        self.total_price = total_price;

        tracing::debug!(%quantity, total_price = %self.total_price, "Quantity updated");
        Ok(quantity)
    }

    fn recompute_saved_items_count(&mut self) {
        self.saved_items_count = self.saved.count();
    }
}
