//! Storefront services.
//!
//! - `cart` - Add-to-cart port and its logging implementation

pub mod cart;

pub use cart::{CartIntent, CartService, LoggingCart};
