//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use cosmo_core::{ProductCategory, ProductView, normalize};
use serde::Deserialize;
use serde::de::value::{Error as ValueError, StringDeserializer};
use serde::de::{Deserializer, IntoDeserializer};
use tracing::instrument;

use crate::components::{CardLayout, ProductCard};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Catalog browser query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// `grid` or `list`; anything else reads as grid.
    #[serde(default, deserialize_with = "lenient_layout")]
    pub view: CardLayout,
    /// Category id to filter by.
    pub category: Option<String>,
}

/// Parse `view` into a [`CardLayout`], falling back to the default.
fn lenient_layout<'de, D>(deserializer: D) -> std::result::Result<CardLayout, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| {
            let value: StringDeserializer<ValueError> = value.into_deserializer();
            CardLayout::deserialize(value).ok()
        })
        .unwrap_or_default())
}

impl CatalogQuery {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Listing URL for `layout`, optionally filtered to `category`.
fn listing_href(layout: CardLayout, category: Option<&str>) -> String {
    match category {
        Some(category) => format!(
            "/product?view={}&category={}",
            layout.as_str(),
            urlencoding::encode(category)
        ),
        None => format!("/product?view={}", layout.as_str()),
    }
}

/// Entry in the category filter bar.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub cards: Vec<ProductCard>,
    pub layout: CardLayout,
    pub category_links: Vec<CategoryLink>,
    pub all_href: String,
    pub all_active: bool,
    pub active_category: Option<ProductCategory>,
    pub grid_href: String,
    pub list_href: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Display the catalog browser.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let layout = query.view;
    let categories = state.catalog().categories().await.to_vec();
    let filter = query.category();

    let cards = state
        .catalog()
        .products()
        .await
        .iter()
        .map(normalize)
        .filter(|product| filter.is_none_or(|category| product.category == category))
        .map(|product| ProductCard::new(product, layout))
        .collect();

    let active_category = filter.and_then(|id| categories.iter().find(|c| c.matches(id)).cloned());
    let category_links = categories
        .iter()
        .map(|category| CategoryLink {
            name: category.name.clone(),
            href: listing_href(layout, Some(category.id.as_str())),
            active: filter.is_some_and(|id| category.matches(id)),
        })
        .collect();

    ProductsIndexTemplate {
        cards,
        layout,
        category_links,
        all_href: listing_href(layout, None),
        all_active: filter.is_none(),
        active_category,
        grid_href: listing_href(CardLayout::Grid, filter),
        list_href: listing_href(CardLayout::List, filter),
    }
}

/// Display the product detail page.
///
/// # Errors
///
/// Returns 404 if no product has this id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let raw = state
        .catalog()
        .product(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        product: normalize(&raw),
    })
}
