//! Core types for Brightcart.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{Price, PriceError};
pub use product::{CartEntry, Product};
pub use quantity::{Quantity, QuantityError, QuantityInput};
