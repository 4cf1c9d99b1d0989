//! Seed catalog: the static product and category dataset.
//!
//! Loaded once at startup (embedded JSON, or a file named by
//! `CATALOG_SEED_PATH`) and immutable afterwards.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use cosmo_core::{CatalogDataset, CatalogProduct, ProductCategory, RawProduct};

use super::CatalogError;

/// Dataset compiled into the binary.
const EMBEDDED_SEED: &str = include_str!("../../data/catalog.json");

/// The seed dataset plus its products in raw form, ready for normalization.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    dataset: CatalogDataset,
    categories: Arc<[ProductCategory]>,
    raw_products: Arc<[RawProduct]>,
}

impl StaticCatalog {
    /// Load the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Load from `path` when given, else the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or two products share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let dataset: CatalogDataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Wrap an already-built dataset.
    ///
    /// Products pointing at unknown categories are kept (categories are
    /// matched by value only) but logged.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] if two products share an id.
    pub fn from_dataset(dataset: CatalogDataset) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &dataset.products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
            if dataset.category(&product.category).is_none() {
                tracing::warn!(
                    product_id = %product.id,
                    category = %product.category,
                    "Seed product references an unknown category"
                );
            }
        }

        let categories = dataset.categories.clone().into();
        let raw_products = dataset.products.iter().map(RawProduct::from).collect();

        Ok(Self {
            dataset,
            categories,
            raw_products,
        })
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> Arc<[ProductCategory]> {
        Arc::clone(&self.categories)
    }

    /// Canonical product records in display order.
    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.dataset.products
    }

    /// Products in raw form, in display order.
    #[must_use]
    pub fn raw_products(&self) -> Arc<[RawProduct]> {
        Arc::clone(&self.raw_products)
    }
}
