//! Catalog products and cart entries.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{Price, PriceError};
use super::quantity::Quantity;

/// One catalog entry.
///
/// Display fields are optional because the catalog data is uneven; only the
/// id, image and price are always present. `is_saved` and `in_cart` are UI
/// flags owned by the store and default to `false` when loading data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub image_url: String,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub in_cart: bool,
}

impl Product {
    /// Case-insensitive substring match against the title, description and
    /// short description. `needle` must already be lowercased.
    ///
    /// An empty needle matches every product.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.short_description]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(needle))
    }
}

/// A product's presence in the cart.
///
/// Holds its own copy of the product data taken when the product was added,
/// so later catalog flag changes never alter what the cart shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: Quantity,
}

impl CartEntry {
    /// Create an entry with a quantity of one.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::ONE,
        }
    }

    /// The product ID of this entry.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the amount leaves the decimal range.
    pub fn line_total(&self) -> Result<Price, PriceError> {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("kindle"),
            image_url: "/images/kindle.jpg".to_string(),
            image_alt: None,
            title: Some("Kindle Paperwhite".to_string()),
            short_description: Some("Waterproof e-reader".to_string()),
            description: None,
            brand: Some("Amazon".to_string()),
            price: Price::from_cents(13_999),
            tag: None,
            tagline: None,
            rating: Some(4.5),
            review_count: None,
            is_saved: false,
            in_cart: false,
        }
    }

    #[test]
    fn test_matches_any_text_field() {
        let product = sample();
        assert!(product.matches_lowercase("paperwhite"));
        assert!(product.matches_lowercase("e-reader"));
        assert!(product.matches_lowercase(""));
        assert!(!product.matches_lowercase("amazon"));
    }

    #[test]
    fn test_deserialize_defaults_flags_and_coerces_price() {
        let json = r#"{"id":"b","imageUrl":"/b.jpg","price":"20","title":"B"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Price::from_cents(2000));
        assert!(!product.is_saved);
        assert!(!product.in_cart);
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_line_total() {
        let mut entry = CartEntry::new(sample());
        assert_eq!(entry.line_total().unwrap(), Price::from_cents(13_999));

        entry.quantity = Quantity::new(2).unwrap();
        assert_eq!(entry.line_total().unwrap(), Price::from_cents(27_998));
    }

    #[test]
    fn test_entry_serializes_flat() {
        let value = serde_json::to_value(CartEntry::new(sample())).unwrap();
        assert_eq!(value["id"], "kindle");
        assert_eq!(value["quantity"], 1);
    }
}
