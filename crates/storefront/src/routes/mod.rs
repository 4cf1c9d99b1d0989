//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (probes the catalog API)
//!
//! # Catalog
//! GET  /product                - Catalog browser (?view=grid|list&category=<id>)
//! GET  /product/{id}           - Product detail
//!
//! # Cart
//! POST /cart/add               - Add to cart (204 + HX-Trigger for htmx, else redirect)
//!
//! # Pages
//! GET  /register               - Reseller registration
//! GET  /terms                  - Terms & conditions
//! GET  /privacy                - Privacy policy
//!
//! # Admin
//! GET  /admin                  - Admin dashboard
//!
//! # Assets
//! GET  /placeholder-image.jpg  - Image shown for products without images
//! GET  /static/*               - Stylesheet and images
//! ```

pub mod admin;
pub mod cart;
pub mod health;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::Request,
    middleware,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::middleware::{RequestId, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Placeholder image path under the static directory.
const PLACEHOLDER_FILE: &str = "images/placeholder-image.jpg";

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create all page and action routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/product", product_routes())
        .route("/cart/add", post(cart::add))
        .route("/register", get(pages::register))
        .route("/terms", get(pages::terms))
        .route("/privacy", get(pages::privacy))
        .route("/admin", get(admin::dashboard))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Build the complete application: routes, static assets and middleware.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(routes())
        .route_service(
            cosmo_core::view::PLACEHOLDER_IMAGE,
            ServeFile::new(static_dir.join(PLACEHOLDER_FILE)),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .extensions()
                .get::<RequestId>()
                .map_or("", RequestId::as_str);
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
