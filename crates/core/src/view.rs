//! Normalization of raw product records into render-ready view models.
//!
//! [`normalize`] is the single place where fallback policy lives. It is total:
//! any [`RawProduct`], however sparse, produces a [`ProductView`] in which
//! every field the templates touch has a concrete value.
//!
//! | Field | Source (first usable wins) | Default |
//! |---|---|---|
//! | id | `id`, `_id` | `""` |
//! | name | `name` | `"No Name"` |
//! | price | `price` | `0` |
//! | category | `category` | `"Category"` |
//! | description | `shortDescription`, `description` | `""` |
//! | image | `images[0]` | `/placeholder-image.jpg` |
//! | quantity | `quantityOptions`, `quantity` | none |
//!
//! Empty strings count as absent.

use crate::discount::Discount;
use crate::types::{Price, ProductId, QuantityField, QuantityOption, RawProduct, Route};

/// Image shown when a product has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Name shown when a product has none.
pub const DEFAULT_NAME: &str = "No Name";

/// Category label shown when a product has none.
pub const DEFAULT_CATEGORY: &str = "Category";

/// Stock state from the tri-state `inStock` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockStatus {
    /// `inStock: true`.
    InStock,
    /// `inStock` absent; treated as purchasable.
    #[default]
    Unspecified,
    /// `inStock: false`.
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub const fn from_flag(in_stock: Option<bool>) -> Self {
        match in_stock {
            Some(true) => Self::InStock,
            None => Self::Unspecified,
            Some(false) => Self::OutOfStock,
        }
    }

    /// Only an explicit out-of-stock flag blocks purchase.
    #[must_use]
    pub const fn can_purchase(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }

    /// Availability text, if the record said anything about stock.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::InStock => Some("In Stock"),
            Self::Unspecified => None,
            Self::OutOfStock => Some("Out of Stock"),
        }
    }
}

/// Resolved quantity information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuantityDisplay {
    #[default]
    None,
    Label(String),
    Tiers(Vec<QuantityOption>),
}

impl QuantityDisplay {
    fn resolve(field: Option<&QuantityField>) -> Self {
        match field {
            Some(QuantityField::Label(label)) if !label.is_empty() => Self::Label(label.clone()),
            Some(QuantityField::Tiers(tiers)) if !tiers.is_empty() => Self::Tiers(tiers.clone()),
            _ => Self::None,
        }
    }
}

/// The fully-defaulted, render-ready form of a product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Original price as given, whether or not it implies a discount.
    pub original_price: Option<Price>,
    pub discount: Discount,
    pub category: String,
    /// Short description for cards.
    pub description: String,
    /// Long description for the detail page.
    pub long_description: String,
    /// Display image.
    pub image: String,
    /// The display image followed by the remaining non-empty images.
    pub gallery: Vec<String>,
    pub stock: StockStatus,
    pub featured: bool,
    pub quantity: QuantityDisplay,
}

/// Normalize a raw product record. Pure and total.
#[must_use]
pub fn normalize(raw: &RawProduct) -> ProductView {
    let price = raw.price.map_or(Price::ZERO, Price::new);
    let original_price = raw.original_price.map(Price::new);
    let discount = Discount::compute(price.amount(), raw.original_price);

    let description = first_non_empty(&[
        raw.short_description.as_deref(),
        raw.description.as_deref(),
    ])
    .unwrap_or_default()
    .to_string();

    let long_description = first_non_empty(&[
        raw.full_description.as_deref(),
        raw.description.as_deref(),
        raw.short_description.as_deref(),
    ])
    .unwrap_or_default()
    .to_string();

    let images = raw.images.as_deref().unwrap_or_default();
    let image = images
        .first()
        .filter(|url| !url.is_empty())
        .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), Clone::clone);
    // The gallery always leads with the display image.
    let gallery: Vec<String> = std::iter::once(image.clone())
        .chain(images.iter().skip(1).filter(|url| !url.is_empty()).cloned())
        .collect();

    let quantity = QuantityDisplay::resolve(
        raw.quantity_options
            .as_ref()
            .filter(|field| !is_blank(field))
            .or(raw.quantity.as_ref()),
    );

    ProductView {
        id: raw.canonical_id(),
        name: non_empty_or(raw.name.as_deref(), DEFAULT_NAME),
        price,
        original_price,
        discount,
        category: non_empty_or(raw.category.as_deref(), DEFAULT_CATEGORY),
        description,
        long_description,
        image,
        gallery,
        stock: StockStatus::from_flag(raw.in_stock),
        featured: raw.is_feature.unwrap_or(false),
        quantity,
    }
}

impl From<&RawProduct> for ProductView {
    fn from(raw: &RawProduct) -> Self {
        normalize(raw)
    }
}

impl ProductView {
    /// Where clicking the card leads.
    #[must_use]
    pub fn detail_route(&self) -> Route {
        Route::ProductDetail(self.id.clone())
    }

    #[must_use]
    pub fn detail_href(&self) -> String {
        self.detail_route().href()
    }

    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.discount.has_discount()
    }

    /// Discount badge text, e.g. "20% OFF".
    #[must_use]
    pub fn discount_label(&self) -> Option<String> {
        self.discount.badge_label()
    }

    #[must_use]
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Struck-through original price; only present alongside a discount.
    #[must_use]
    pub fn original_price_display(&self) -> Option<String> {
        self.original_price
            .filter(|_| self.has_discount())
            .map(|price| price.display())
    }

    #[must_use]
    pub const fn can_add_to_cart(&self) -> bool {
        self.stock.can_purchase()
    }

    /// Lowest tier price when bulk tiers are present.
    #[must_use]
    pub fn price_from(&self) -> Option<Price> {
        self.quantity_tiers()
            .iter()
            .map(|tier| Price::new(tier.price))
            .min()
    }

    /// Card price: "From" the lowest tier for unpriced tiered products,
    /// otherwise the unit price.
    #[must_use]
    pub fn headline_price(&self) -> String {
        match self.price_from() {
            Some(from) if self.price == Price::ZERO => format!("From {}", from.display()),
            _ => self.price_display(),
        }
    }

    #[must_use]
    pub fn quantity_label(&self) -> Option<&str> {
        match &self.quantity {
            QuantityDisplay::Label(label) => Some(label.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn quantity_tiers(&self) -> &[QuantityOption] {
        match &self.quantity {
            QuantityDisplay::Tiers(tiers) => tiers.as_slice(),
            _ => &[],
        }
    }
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    first_non_empty(&[value]).unwrap_or(default).to_string()
}

fn is_blank(field: &QuantityField) -> bool {
    match field {
        QuantityField::Label(label) => label.is_empty(),
        QuantityField::Tiers(tiers) => tiers.is_empty(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    use super::*;

    fn view(value: Value) -> ProductView {
        normalize(&RawProduct::from_value(value))
    }

    #[test]
    fn test_missing_ids_give_empty_id_and_listing_link() {
        let product = view(json!({"name": "Test"}));
        assert!(product.id.is_empty());
        assert_eq!(product.detail_href(), "/product");
    }

    #[test]
    fn test_object_id_only() {
        let product = view(json!({"_id": "65f0a1b2"}));
        assert_eq!(product.id.as_str(), "65f0a1b2");
        assert_eq!(product.detail_href(), "/product/65f0a1b2");
    }

    #[test]
    fn test_id_wins_over_object_id() {
        let product = view(json!({"id": "lip-01", "_id": "65f0a1b2"}));
        assert_eq!(product.id.as_str(), "lip-01");
    }

    #[test]
    fn test_minimal_record_scenario() {
        let product = view(json!({"name": "Test", "price": 850}));

        assert_eq!(product.name, "Test");
        assert_eq!(product.price, Price::new(Decimal::new(850, 0)));
        assert!(!product.has_discount());
        assert_eq!(product.discount_label(), None);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.detail_href(), "/product");
    }

    #[test]
    fn test_empty_record_uses_every_default() {
        let product = view(json!({}));

        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.description, "");
        assert_eq!(product.long_description, "");
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.gallery, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(product.stock, StockStatus::Unspecified);
        assert!(!product.featured);
        assert_eq!(product.quantity, QuantityDisplay::None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let product = view(json!({"name": "", "category": "", "images": ["", "b.jpg"]}));
        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_gallery_starts_with_display_image() {
        let product = view(json!({"images": ["", "b.jpg", "", "c.jpg"]}));
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(
            product.gallery,
            vec![PLACEHOLDER_IMAGE.to_string(), "b.jpg".to_string(), "c.jpg".to_string()]
        );
        assert_eq!(product.gallery[0], product.image);
    }

    #[test]
    fn test_empty_images_use_placeholder() {
        assert_eq!(view(json!({"images": []})).image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_first_image_is_display_image() {
        let product = view(json!({"images": ["a.jpg", "b.jpg"]}));
        assert_eq!(product.image, "a.jpg");
        assert_eq!(product.gallery.len(), 2);
    }

    #[test]
    fn test_discount_derivation() {
        let product = view(json!({"price": 800, "originalPrice": 1000}));
        assert!(product.has_discount());
        assert_eq!(product.discount.percent(), 20);
        assert_eq!(product.original_price_display().as_deref(), Some("₹1000.00"));

        let product = view(json!({"price": 1000, "originalPrice": 1000}));
        assert!(!product.has_discount());
        assert_eq!(product.original_price_display(), None);
    }

    #[test]
    fn test_missing_price_with_original_price_reads_as_full_discount() {
        let product = view(json!({"originalPrice": 499}));
        assert_eq!(product.discount.percent(), 100);
    }

    #[test]
    fn test_description_fallbacks() {
        let product = view(json!({"description": "Long lasting"}));
        assert_eq!(product.description, "Long lasting");
        assert_eq!(product.long_description, "Long lasting");

        let product = view(json!({
            "shortDescription": "Matte finish",
            "fullDescription": "A matte finish lipstick with shea butter."
        }));
        assert_eq!(product.description, "Matte finish");
        assert_eq!(product.long_description, "A matte finish lipstick with shea butter.");
    }

    #[test]
    fn test_stock_is_tri_state() {
        assert!(!view(json!({"inStock": false})).can_add_to_cart());
        assert!(view(json!({"inStock": true})).can_add_to_cart());
        assert!(view(json!({})).can_add_to_cart());
        assert_eq!(StockStatus::OutOfStock.label(), Some("Out of Stock"));
        assert_eq!(StockStatus::Unspecified.label(), None);
    }

    #[test]
    fn test_quantity_shapes() {
        let product = view(json!({"quantity": "Pack of 6"}));
        assert_eq!(product.quantity_label(), Some("Pack of 6"));
        assert!(product.quantity_tiers().is_empty());

        let product = view(json!({
            "quantity": "ignored",
            "quantityOptions": [
                {"type": "Dozen", "price": 1300, "minOrder": 2},
                {"type": "Single", "price": 120, "minOrder": 24}
            ]
        }));
        assert_eq!(product.quantity_tiers().len(), 2);
        assert_eq!(product.quantity_label(), None);
        assert_eq!(product.price_from(), Some(Price::new(Decimal::new(120, 0))));
    }

    #[test]
    fn test_empty_quantity_options_fall_back_to_quantity() {
        let product = view(json!({"quantity": "Carton", "quantityOptions": []}));
        assert_eq!(product.quantity_label(), Some("Carton"));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = RawProduct::from_value(json!({
            "_id": "x1",
            "price": 800,
            "originalPrice": 1000,
            "images": ["a.jpg"],
            "isFeature": true
        }));
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_catalog_product_flows_through_normalization() {
        let catalog = crate::types::CatalogProduct {
            id: ProductId::new("rose-serum"),
            name: "Rose Serum".to_string(),
            category: "skincare".to_string(),
            short_description: "Hydrating".to_string(),
            full_description: "Hydrating rose serum.".to_string(),
            images: vec!["/static/images/products/rose-serum.jpg".to_string()],
            quantity_options: vec![QuantityOption {
                kind: "Case of 24".to_string(),
                price: Decimal::new(5400, 0),
                min_order: 1,
            }],
            featured: true,
        };

        let product = normalize(&RawProduct::from(&catalog));
        assert_eq!(product.detail_href(), "/product/rose-serum");
        assert!(product.featured);
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.long_description, "Hydrating rose serum.");
        assert_eq!(product.price_from(), Some(Price::new(Decimal::new(5400, 0))));
        assert_eq!(product.headline_price(), "From ₹5400.00");
    }

    #[test]
    fn test_headline_price_prefers_unit_price() {
        let product = view(json!({
            "price": 250,
            "quantityOptions": [{"type": "Dozen", "price": 2700, "minOrder": 1}]
        }));
        assert_eq!(product.headline_price(), "₹250.00");
        assert_eq!(view(json!({})).headline_price(), "₹0.00");
    }
}
