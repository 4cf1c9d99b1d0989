//! Canonical catalog shapes used by the seed dataset.
//!
//! These are fully specified records: every field is required. Remote API
//! responses only approximate this shape and are read as
//! [`RawProduct`](crate::types::RawProduct) instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{CategoryId, ProductId};

/// A bulk pricing tier (e.g., "Box of 12" at ₹1,200, minimum 5 boxes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityOption {
    /// Pack description (e.g., "Single", "Dozen", "Carton").
    #[serde(rename = "type")]
    pub kind: String,
    /// Price per pack.
    pub price: Decimal,
    /// Minimum number of packs per order.
    pub min_order: u32,
}

/// A product category. Flat, no hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Category id, matched by value against a product's `category`.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category image URL.
    pub image: String,
    /// Short marketing description.
    pub description: String,
}

impl ProductCategory {
    /// Whether a product's category string refers to this category.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        self.id.as_str() == category
    }

    /// Catalog browser URL filtered to this category.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/product?category={}", urlencoding::encode(self.id.as_str()))
    }
}

/// A product in the seed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    /// Category id (see [`ProductCategory::id`]).
    pub category: String,
    pub short_description: String,
    pub full_description: String,
    pub images: Vec<String>,
    pub quantity_options: Vec<QuantityOption>,
    pub featured: bool,
}

/// The complete seed dataset: categories and products, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDataset {
    pub categories: Vec<ProductCategory>,
    pub products: Vec<CatalogProduct>,
}

impl CatalogDataset {
    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&ProductCategory> {
        self.categories.iter().find(|category| category.matches(id))
    }
}
