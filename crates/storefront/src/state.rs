//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::services::{CartService, LoggingCart};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog, the cart port and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Arc<dyn CartService>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Loads the seed catalog and, when configured, the catalog API client.
    /// Add-to-cart intents go to [`LoggingCart`].
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_config(&config.catalog)?;
        Ok(Self::with_parts(config, catalog, Arc::new(LoggingCart)))
    }

    /// Assemble state from already-built parts.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        cart: Arc<dyn CartService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the cart port.
    #[must_use]
    pub fn cart(&self) -> &dyn CartService {
        self.inner.cart.as_ref()
    }
}
