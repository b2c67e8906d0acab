//! Product search.
//!
//! A plain case-insensitive substring filter over product text fields. The
//! catalog is small and held in memory, so there is no index to build.

use brightcart_core::Product;

/// Products whose title, description or short description contain `query`,
/// ignoring case, in catalog order.
///
/// Leading and trailing whitespace in `query` is ignored. An empty query
/// matches every product; an empty result means "no products found".
#[must_use]
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|product| product.matches_lowercase(&needle))
        .collect()
}
