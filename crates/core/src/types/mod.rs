//! Core types for the storefront.
//!
//! This module provides the raw (external) and canonical (catalog) product
//! shapes plus type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
mod lenient;
pub mod price;
pub mod raw;
pub mod route;

pub use catalog::{CatalogDataset, CatalogProduct, ProductCategory, QuantityOption};
pub use id::*;
pub use price::{CURRENCY_SYMBOL, Price};
pub use raw::{QuantityField, RawProduct};
pub use route::Route;
