//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use cosmo_core::{ProductCategory, normalize};
use tracing::instrument;

use crate::components::{CardLayout, ProductCard};
use crate::filters;
use crate::state::AppState;

/// Number of featured products shown on the home page.
const FEATURED_LIMIT: usize = 8;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<ProductCategory>,
    /// Featured products, grid layout.
    pub featured: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state.catalog().categories().await.to_vec();

    let featured = state
        .catalog()
        .products()
        .await
        .iter()
        .map(normalize)
        .filter(|product| product.featured)
        .take(FEATURED_LIMIT)
        .map(|product| ProductCard::new(product, CardLayout::Grid))
        .collect();

    HomeTemplate {
        categories,
        featured,
    }
}
