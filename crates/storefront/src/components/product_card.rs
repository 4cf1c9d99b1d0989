//! Product card in grid or list layout.
//!
//! The whole card navigates to the product detail page. The Add to Cart
//! control sits above that navigation target: activating it yields an
//! [`Activation`] that tells the card whether the click was consumed, so a
//! cart click never turns into a navigation.

use askama::Template;
use cosmo_core::ProductView;
use serde::Deserialize;

use crate::services::CartIntent;

/// Card composition, chosen by the caller per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    /// Image on top in an aspect-locked frame, full-width actions.
    #[default]
    Grid,
    /// Fixed-size image at the left, compact action row.
    List,
}

impl CardLayout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Badge overlaid on the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Discount,
    Featured,
}

impl BadgeKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Discount => "badge badge--discount",
            Self::Featured => "badge badge--featured",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

/// What the card's action row can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardActions {
    /// Hide the Add to Cart control (list layout).
    pub compact: bool,
    /// Add to Cart is clickable; false exactly when the product is out of stock.
    pub enabled: bool,
}

/// Result of activating the Add to Cart control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The control handled the click; the card must not navigate.
    /// Carries the intent when the control was enabled.
    Consumed(Option<CartIntent>),
    /// No control was rendered, so the click belongs to the card.
    NotHandled,
}

impl CardActions {
    /// Activate Add to Cart for `product`.
    #[must_use]
    pub fn activate_add_to_cart(&self, product: &ProductView) -> Activation {
        if self.compact {
            return Activation::NotHandled;
        }
        if !self.enabled {
            return Activation::Consumed(None);
        }
        Activation::Consumed(Some(CartIntent {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
        }))
    }
}

/// Where on the card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    /// Anywhere that is not an interactive control.
    Body,
    /// The Add to Cart control.
    AddToCart,
}

/// What a click on the card should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEffect {
    /// Go to this URL.
    Navigate(String),
    /// Hand this intent to the cart service. No navigation.
    AddToCart(CartIntent),
    /// Nothing happens.
    None,
}

/// A product card ready to render.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product: ProductView,
    pub layout: CardLayout,
    pub actions: CardActions,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: ProductView, layout: CardLayout) -> Self {
        let actions = CardActions {
            compact: layout == CardLayout::List,
            enabled: product.can_add_to_cart(),
        };
        Self {
            product,
            layout,
            actions,
        }
    }

    #[must_use]
    pub fn is_grid(&self) -> bool {
        self.layout == CardLayout::Grid
    }

    /// Link target for the whole card.
    #[must_use]
    pub fn href(&self) -> String {
        self.product.detail_href()
    }

    /// Image badges, discount first.
    #[must_use]
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::with_capacity(2);
        if let Some(label) = self.product.discount_label() {
            badges.push(Badge {
                kind: BadgeKind::Discount,
                label,
            });
        }
        if self.product.featured {
            badges.push(Badge {
                kind: BadgeKind::Featured,
                label: "Featured".to_string(),
            });
        }
        badges
    }

    /// Resolve a click on `target`.
    #[must_use]
    pub fn handle_click(&self, target: CardTarget) -> CardEffect {
        match target {
            CardTarget::Body => CardEffect::Navigate(self.href()),
            CardTarget::AddToCart => match self.actions.activate_add_to_cart(&self.product) {
                Activation::Consumed(Some(intent)) => CardEffect::AddToCart(intent),
                Activation::Consumed(None) => CardEffect::None,
                Activation::NotHandled => CardEffect::Navigate(self.href()),
            },
        }
    }

    /// Render this card on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(&self) -> askama::Result<String> {
        CardFragment { card: self }.render()
    }
}

/// A single card, outside any page.
#[derive(Template)]
#[template(path = "partials/card_fragment.html")]
struct CardFragment<'a> {
    card: &'a ProductCard,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cosmo_core::{RawProduct, normalize};
    use serde_json::json;

    use super::*;

    fn card(value: serde_json::Value, layout: CardLayout) -> ProductCard {
        ProductCard::new(normalize(&RawProduct::from_value(value)), layout)
    }

    fn lipstick(layout: CardLayout) -> ProductCard {
        card(
            json!({
                "_id": "lip-01",
                "name": "Velvet Matte Lipstick",
                "price": 800,
                "originalPrice": 1000,
                "category": "lipstick",
                "description": "Long-wear matte finish",
                "images": ["https://cdn.example.com/lip.jpg"],
                "isFeature": true
            }),
            layout,
        )
    }

    #[test]
    fn test_layout_from_query_value() {
        let layout: CardLayout = serde_json::from_value(json!("list")).unwrap();
        assert_eq!(layout, CardLayout::List);
        assert_eq!(CardLayout::default(), CardLayout::Grid);
        assert!(serde_json::from_value::<CardLayout>(json!("table")).is_err());
    }

    #[test]
    fn test_badges_discount_before_featured() {
        let badges = lipstick(CardLayout::Grid).badges();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].kind, BadgeKind::Discount);
        assert_eq!(badges[0].label, "20% OFF");
        assert_eq!(badges[1].kind, BadgeKind::Featured);
    }

    #[test]
    fn test_no_badges_for_plain_product() {
        let plain = card(json!({"id": "p1", "price": 100}), CardLayout::Grid);
        assert!(plain.badges().is_empty());
    }

    #[test]
    fn test_body_click_navigates_to_detail() {
        let card = lipstick(CardLayout::Grid);
        assert_eq!(
            card.handle_click(CardTarget::Body),
            CardEffect::Navigate("/product/lip-01".to_string())
        );
    }

    #[test]
    fn test_empty_id_navigates_to_listing() {
        let card = card(json!({"name": "Mystery"}), CardLayout::Grid);
        assert_eq!(
            card.handle_click(CardTarget::Body),
            CardEffect::Navigate("/product".to_string())
        );
    }

    #[test]
    fn test_add_to_cart_click_does_not_navigate() {
        let card = lipstick(CardLayout::Grid);
        let CardEffect::AddToCart(intent) = card.handle_click(CardTarget::AddToCart) else {
            panic!("expected add to cart");
        };
        assert_eq!(intent.product_id.as_str(), "lip-01");
        assert_eq!(intent.product_name, "Velvet Matte Lipstick");
    }

    #[test]
    fn test_disabled_add_to_cart_consumes_click() {
        let card = card(json!({"id": "p2", "inStock": false}), CardLayout::Grid);
        assert!(!card.actions.enabled);
        assert_eq!(card.handle_click(CardTarget::AddToCart), CardEffect::None);
    }

    #[test]
    fn test_missing_stock_flag_keeps_add_to_cart_enabled() {
        let card = card(json!({"id": "p3"}), CardLayout::Grid);
        assert!(card.actions.enabled);
    }

    #[test]
    fn test_list_layout_is_compact() {
        let card = lipstick(CardLayout::List);
        assert!(card.actions.compact);
        assert_eq!(
            card.actions.activate_add_to_cart(&card.product),
            Activation::NotHandled
        );
    }

    #[test]
    fn test_grid_render() {
        let html = lipstick(CardLayout::Grid).render_html().unwrap();

        assert!(html.contains("product-card--grid"));
        assert!(html.contains(r#"href="/product/lip-01""#));
        assert!(html.contains("20% OFF"));
        assert!(html.contains("Featured"));
        assert!(html.contains("₹800.00"));
        assert!(html.contains("₹1000.00"));
        assert!(html.contains("Add to Cart"));
        assert!(html.contains(r#"name="product_id" value="lip-01""#));
        assert!(html.find("20% OFF").unwrap() < html.find("Featured").unwrap());
    }

    #[test]
    fn test_list_render_hides_add_to_cart() {
        let html = lipstick(CardLayout::List).render_html().unwrap();

        assert!(html.contains("product-card--list"));
        assert!(html.contains("View Details"));
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn test_out_of_stock_render_disables_button() {
        let html = card(json!({"id": "p2", "inStock": false}), CardLayout::Grid)
            .render_html()
            .unwrap();

        assert!(html.contains("disabled"));
        assert!(html.contains("Out of Stock"));
    }

    #[test]
    fn test_defaults_render() {
        let html = card(json!({}), CardLayout::Grid).render_html().unwrap();

        assert!(html.contains("No Name"));
        assert!(html.contains("Category"));
        assert!(html.contains("/placeholder-image.jpg"));
        assert!(html.contains("₹0.00"));
        assert!(html.contains(r#"href="/product""#));
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = card(json!({"id": "x", "name": "<script>alert(1)</script>"}), CardLayout::Grid)
            .render_html()
            .unwrap();
        assert!(!html.contains("<script>alert"));
    }
}
