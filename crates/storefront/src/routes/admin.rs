//! Admin layout shell.
//!
//! Read-only catalog overview rendered inside the admin chrome. Access
//! control belongs to the deployment (reverse proxy), not this handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use cosmo_core::{StockStatus, normalize};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub product_count: usize,
    pub category_count: usize,
    pub out_of_stock_count: usize,
    pub source: &'static str,
}

/// Display the admin dashboard.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.catalog().products().await;
    let out_of_stock_count = products
        .iter()
        .filter(|raw| normalize(raw).stock == StockStatus::OutOfStock)
        .count();

    DashboardTemplate {
        product_count: products.len(),
        category_count: state.catalog().categories().await.len(),
        out_of_stock_count,
        source: state.catalog().source().as_str(),
    }
}
