//! Add-to-cart route handler.
//!
//! The storefront holds no cart state. A submitted Add to Cart form is
//! resolved through the product card's activation contract and, when it
//! yields an intent, handed to the configured [`CartService`].
//!
//! [`CartService`]: crate::services::CartService

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use cosmo_core::normalize;
use serde::Deserialize;
use tracing::instrument;

use crate::components::{CardEffect, CardLayout, CardTarget, ProductCard};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// HTMX event fired after a successful add.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub product_id: String,
}

/// Whether the request came from htmx.
fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Add a product to the cart.
///
/// htmx requests get `204 No Content` with an `HX-Trigger: cart-updated`
/// header. Plain form posts are redirected back to the product page.
///
/// # Errors
///
/// - 400 if `product_id` is empty
/// - 404 if the product does not exist
/// - 409 if the product is out of stock
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = form.product_id.trim();
    if product_id.is_empty() {
        return Err(AppError::BadRequest("product_id is required".to_string()));
    }

    let raw = state
        .catalog()
        .product(product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let card = ProductCard::new(normalize(&raw), CardLayout::Grid);
    let detail_href = card.href();

    match card.handle_click(CardTarget::AddToCart) {
        CardEffect::AddToCart(intent) => {
            add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id)]));
            state.cart().add_to_cart(&intent);
        }
        CardEffect::None => {
            return Err(AppError::Conflict(format!(
                "{} is out of stock",
                card.product.name
            )));
        }
        CardEffect::Navigate(_) => {
            return Err(AppError::Internal(
                "Add to Cart control missing from grid card".to_string(),
            ));
        }
    }

    if is_htmx(&headers) {
        Ok((
            StatusCode::NO_CONTENT,
            AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        )
            .into_response())
    } else {
        Ok(Redirect::to(&detail_href).into_response())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert("HX-Request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));

        headers.insert("HX-Request", HeaderValue::from_static("false"));
        assert!(!is_htmx(&headers));
    }
}
