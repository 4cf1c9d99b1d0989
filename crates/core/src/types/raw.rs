//! Raw product records as they arrive from the catalog API.
//!
//! Every field is optional and several have alternate names (`id`/`_id`,
//! `quantity`/`quantityOptions`). Values of the wrong JSON type are read as
//! absent, and unknown fields are kept in [`RawProduct::extra`] so records
//! round-trip without loss.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::catalog::{CatalogProduct, QuantityOption};
use crate::types::id::ProductId;
use crate::types::lenient;

/// Quantity information in either of its two wire shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityField {
    /// Free-form display text (e.g., "Pack of 6").
    Label(String),
    /// Bulk pricing tiers.
    Tiers(Vec<QuantityOption>),
}

/// A product record of uncertain shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document-store id, used when `id` is missing.
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings", skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Tri-state: only an explicit `false` marks the product unavailable.
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub is_feature: Option<bool>,
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<QuantityField>,
    #[serde(default, deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub quantity_options: Option<QuantityField>,
    /// Fields this storefront does not know about.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawProduct {
    /// Read a record from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty record, which normalizes to the
    /// all-defaults view.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// The canonical id: `id`, else `_id`, else empty.
    #[must_use]
    pub fn canonical_id(&self) -> ProductId {
        ProductId::canonical(self.id.as_deref(), self.object_id.as_deref())
    }
}

impl From<&CatalogProduct> for RawProduct {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            id: Some(product.id.to_string()),
            name: Some(product.name.clone()),
            category: Some(product.category.clone()),
            short_description: Some(product.short_description.clone()),
            full_description: Some(product.full_description.clone()),
            images: Some(product.images.clone()),
            is_feature: Some(product.featured),
            quantity_options: Some(QuantityField::Tiers(product.quantity_options.clone())),
            ..Self::default()
        }
    }
}
