//! Catalog listing, validation and search.

#![allow(clippy::print_stdout)]

use std::path::Path;

use brightcart_core::Product;
use brightcart_storefront::search::search_products;
use brightcart_storefront::store::Catalog;
use tracing::info;

use super::load_catalog;

/// Print one line per product: id, price and title.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn list(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(path)?;
    for product in catalog.products() {
        print_product(product);
    }
    info!(count = catalog.len(), "Listed catalog");
    Ok(())
}

/// Parse a catalog file, reporting the product count on success.
///
/// # Errors
///
/// Returns an error if the file is unreadable, is not a JSON product array,
/// or contains duplicate ids.
pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(path)?;
    if catalog.is_empty() {
        return Err(format!("{} contains no products", path.display()).into());
    }

    let untitled = catalog
        .products()
        .iter()
        .filter(|p| p.title.is_none())
        .count();
    if untitled > 0 {
        tracing::warn!(untitled, "Some products have no title");
    }

    println!("{}: {} products OK", path.display(), catalog.len());
    Ok(())
}

/// Print products matching `query`.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn search(query: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(path)?;
    let results = search_products(catalog.products(), query);

    if results.is_empty() {
        println!("No products found");
        return Ok(());
    }

    for product in &results {
        print_product(product);
    }
    info!(query, results = results.len(), "Search complete");
    Ok(())
}

fn print_product(product: &Product) {
    println!(
        "{:<28} {:>10}  {}",
        product.id.as_str(),
        product.price.display(),
        product.title.as_deref().unwrap_or("-")
    );
}
