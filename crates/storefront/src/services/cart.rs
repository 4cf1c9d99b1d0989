//! Cart port.
//!
//! The storefront does not own cart state. Product cards emit a
//! [`CartIntent`] and hand it to whichever [`CartService`] the application
//! was built with.

use cosmo_core::ProductId;
use tracing::info;

/// A request to add one product to the visitor's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartIntent {
    pub product_id: ProductId,
    pub product_name: String,
}

/// Receives add-to-cart intents.
pub trait CartService: Send + Sync {
    /// Record that the visitor asked to add a product.
    fn add_to_cart(&self, intent: &CartIntent);
}

/// Cart service that only logs intents.
///
/// Used until a real cart backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCart;

impl CartService for LoggingCart {
    fn add_to_cart(&self, intent: &CartIntent) {
        info!(
            product_id = %intent.product_id,
            product_name = %intent.product_name,
            "Add to cart"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_cart_accepts_intent() {
        let cart: &dyn CartService = &LoggingCart;
        cart.add_to_cart(&CartIntent {
            product_id: ProductId::new("kajal-01"),
            product_name: "Smudge-Proof Kajal".to_string(),
        });
    }
}
