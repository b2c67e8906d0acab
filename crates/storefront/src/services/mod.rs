//! Outbound service clients for storefront.
//!
//! # Services
//!
//! - `auth` - Credential check against the external authentication endpoint

pub mod auth;
