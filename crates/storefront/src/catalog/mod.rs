//! Catalog data sources.
//!
//! The seed dataset is always loaded. When a catalog API base URL is
//! configured, listings come from the API instead and the seed becomes the
//! fallback: any API failure is logged and the seed is served in its place,
//! so catalog pages keep rendering while the API is down.

mod remote;
mod seed;

pub use remote::RemoteCatalog;
pub use seed::StaticCatalog;

use std::sync::Arc;

use cosmo_core::{ProductCategory, RawProduct};
use thiserror::Error;
use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::config::CatalogConfig;

/// Errors raised while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(String),

    #[error("Catalog API error: {0}")]
    Api(#[from] ApiError),
}

/// Where listings are being served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Seed,
    Remote,
}

impl CatalogSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Remote => "remote",
        }
    }
}

/// Product and category provider shared by all handlers.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    seed: StaticCatalog,
    remote: Option<RemoteCatalog>,
}

impl Catalog {
    /// A catalog serving `seed`, optionally fronted by `remote`.
    #[must_use]
    pub fn new(seed: StaticCatalog, remote: Option<RemoteCatalog>) -> Self {
        Self {
            inner: Arc::new(CatalogInner { seed, remote }),
        }
    }

    /// Build the catalog described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed dataset cannot be loaded or the API
    /// client cannot be built.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let seed = StaticCatalog::load(config.seed_path.as_deref())?;

        let remote = match &config.api_base_url {
            Some(base_url) => {
                let client = ApiClient::new(base_url.clone(), config.api_timeout)?;
                Some(RemoteCatalog::new(
                    client,
                    config.cache_ttl,
                    config.failure_ttl,
                ))
            }
            None => None,
        };

        tracing::info!(
            products = seed.products().len(),
            categories = seed.categories().len(),
            remote = remote.as_ref().map(|r| r.client().base_url().as_str()),
            "Catalog loaded"
        );

        Ok(Self::new(seed, remote))
    }

    /// The seed dataset.
    #[must_use]
    pub fn seed(&self) -> &StaticCatalog {
        &self.inner.seed
    }

    /// The configured primary source.
    #[must_use]
    pub fn source(&self) -> CatalogSource {
        if self.inner.remote.is_some() {
            CatalogSource::Remote
        } else {
            CatalogSource::Seed
        }
    }

    /// All products, in display order.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Arc<[RawProduct]> {
        if let Some(remote) = &self.inner.remote {
            match remote.products().await {
                Ok(products) => return products,
                Err(e @ ApiError::RecentFailure(_)) => {
                    tracing::debug!(error = %e, "Serving seed products");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog API unavailable, serving seed products");
                }
            }
        }
        self.inner.seed.raw_products()
    }

    /// All categories, in display order.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Arc<[ProductCategory]> {
        if let Some(remote) = &self.inner.remote {
            match remote.categories().await {
                Ok(categories) if !categories.is_empty() => return categories,
                Ok(_) => {}
                Err(e @ ApiError::RecentFailure(_)) => {
                    tracing::debug!(error = %e, "Serving seed categories");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog API unavailable, serving seed categories");
                }
            }
        }
        self.inner.seed.categories()
    }

    /// Look up a product by canonical id (`id`, else `_id`).
    ///
    /// An empty id matches nothing.
    pub async fn product(&self, id: &str) -> Option<RawProduct> {
        if id.is_empty() {
            return None;
        }
        self.products()
            .await
            .iter()
            .find(|product| product.canonical_id().as_str() == id)
            .cloned()
    }

    /// Probe the catalog API without reading or touching the caches.
    ///
    /// Succeeds trivially when no API is configured.
    ///
    /// # Errors
    ///
    /// Returns the API error when the probe fails.
    pub async fn check_remote(&self) -> Result<(), CatalogError> {
        let Some(remote) = &self.inner.remote else {
            return Ok(());
        };
        remote.probe().await?;
        Ok(())
    }
}
