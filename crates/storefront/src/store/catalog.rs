//! The product catalog: source of truth for product data and UI flags.

use std::collections::HashSet;
use std::path::Path;

use brightcart_core::{Product, ProductId};
use thiserror::Error;

use super::mock;

/// Errors that can occur when loading a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog JSON is malformed (including non-numeric prices).
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// The full product list, in display order.
///
/// Products are only ever looked up by linear scan; catalogs are small.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The compiled-in mock catalog.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            products: mock::products(),
        }
    }

    /// Build a catalog from a product list.
    ///
    /// UI flags are cleared: a fresh catalog has nothing saved and nothing in
    /// the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn from_products(mut products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &mut products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            product.is_saved = false;
            product.in_cart = false;
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a price cannot be coerced
    /// to a number, or ids are not unique.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Read and parse a catalog JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded from file"
        );
        Ok(catalog)
    }

    /// All products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brightcart_core::Price;

    use super::*;

    #[test]
    fn test_from_json_coerces_prices() {
        let json = r#"[
            {"id": "a", "imageUrl": "/a.jpg", "title": "A", "price": 10},
            {"id": "b", "imageUrl": "/b.jpg", "title": "B", "price": "20"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(&ProductId::new("b")).unwrap().price,
            Price::from_cents(2000)
        );
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id": "a", "imageUrl": "/a.jpg", "price": 1},
            {"id": "a", "imageUrl": "/a2.jpg", "price": 2}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_from_json_rejects_non_numeric_price() {
        let json = r#"[{"id": "a", "imageUrl": "/a.jpg", "price": "call us"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_from_products_clears_flags() {
        let json = r#"[{"id": "a", "imageUrl": "/a.jpg", "price": 1, "isSaved": true, "inCart": true}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.get(&ProductId::new("a")).unwrap();
        assert!(!product.is_saved);
        assert!(!product.in_cart);
    }

    #[test]
    fn test_get_unknown_is_none() {
        assert!(Catalog::mock().get(&ProductId::new("missing")).is_none());
    }
}
