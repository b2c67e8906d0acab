//! Brightcart Core - Shared types library.
//!
//! This crate provides the domain types used across all Brightcart components:
//! - `storefront` - The catalog/cart store and its JSON surface
//! - `cli` - Command-line tools for inspecting the catalog and driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! shared state, no HTTP clients. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, quantities and
//!   emails, plus the `Product` and `CartEntry` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
