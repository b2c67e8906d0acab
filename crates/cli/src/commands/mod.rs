//! Command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;

use std::path::Path;

use brightcart_storefront::store::{Catalog, CatalogError};

/// Load the catalog at `path`, or the mock catalog when no path is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    path.map_or_else(|| Ok(Catalog::mock()), Catalog::load)
}
