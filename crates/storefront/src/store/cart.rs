//! Owned-copy cart.
//!
//! Entries hold their own copy of the product taken at add time. The
//! catalog's `in_cart` flag mirrors membership and is maintained by
//! [`super::Store`], never by this type.

use brightcart_core::{CartEntry, Price, PriceError, Product, ProductId, Quantity};

/// Cart entries in insertion order. At most one entry per product.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// All entries.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the product has an entry.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// The entry for a product, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Append a quantity-one entry. The caller checks membership first.
    pub(crate) fn insert(&mut self, product: Product) {
        debug_assert!(!self.contains(&product.id), "duplicate cart entry");
        self.entries.push(CartEntry::new(product));
    }

    /// Remove and return the entry for a product.
    pub(crate) fn remove(&mut self, id: &ProductId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Number of entries (distinct products, not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of `price × quantity` over all entries.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the total leaves the decimal range.
    pub fn total(&self) -> Result<Price, PriceError> {
        Price::try_sum(self.entries.iter().map(CartEntry::line_total))
    }

    /// The total the cart would have if `id` were set to `quantity`.
    pub(crate) fn total_with(
        &self,
        id: &ProductId,
        quantity: Quantity,
    ) -> Result<Price, PriceError> {
        Price::try_sum(self.entries.iter().map(|e| {
            if e.id() == id {
                e.product.price.times(quantity)
            } else {
                e.line_total()
            }
        }))
    }

    /// The total the cart would have without `id`.
    pub(crate) fn total_without(&self, id: &ProductId) -> Result<Price, PriceError> {
        Price::try_sum(
            self.entries
                .iter()
                .filter(|e| e.id() != id)
                .map(CartEntry::line_total),
        )
    }
}
