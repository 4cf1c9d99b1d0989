//! Cosmo Core - Shared product types and view-model normalization.
//!
//! This crate provides the product presentation data model used by the
//! storefront:
//! - `storefront` - Public-facing wholesale catalog (server-rendered)
//! - `integration-tests` - Black-box tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Raw and canonical product records, ids, prices, routes
//! - [`discount`] - Derived discount badge state
//! - [`view`] - Normalization of raw records into render-ready view models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod discount;
pub mod types;
pub mod view;

pub use discount::Discount;
pub use types::*;
pub use view::{ProductView, QuantityDisplay, StockStatus, normalize};
