//! Cart simulation.

#![allow(clippy::print_stdout)]

use std::path::Path;
use std::sync::Arc;

use brightcart_core::ProductId;
use brightcart_storefront::store::{AddOutcome, LogNotifier, Store};
use tracing::{info, warn};

use super::load_catalog;

/// Add each id to a fresh cart and print the final snapshot as JSON.
///
/// Unknown ids are reported and skipped. Repeated ids leave the cart
/// unchanged, the same as clicking "add" twice in the storefront.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or no id matched.
pub fn simulate(ids: &[String], path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(path)?;
    let mut store = Store::with_catalog(catalog, Arc::new(LogNotifier));

    for raw in ids {
        let id = ProductId::from(raw.as_str());
        match store.add_to_cart(&id) {
            Ok(AddOutcome::Added) => info!(product_id = %id, "Added"),
            Ok(AddOutcome::AlreadyInCart) => info!(product_id = %id, "Already in cart"),
            Err(e) => warn!(product_id = %id, "Skipped: {e}"),
        }
    }

    if store.cart_item_count() == 0 {
        return Err("no product ids matched the catalog".into());
    }

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    Ok(())
}
