//! Static page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;

/// Reseller registration page.
#[derive(Template, WebTemplate)]
#[template(path = "pages/register.html")]
pub struct RegisterTemplate;

/// Terms and conditions page.
#[derive(Template, WebTemplate)]
#[template(path = "pages/terms.html")]
pub struct TermsTemplate;

/// Privacy policy page.
#[derive(Template, WebTemplate)]
#[template(path = "pages/privacy.html")]
pub struct PrivacyTemplate;

pub async fn register() -> impl IntoResponse {
    RegisterTemplate
}

pub async fn terms() -> impl IntoResponse {
    TermsTemplate
}

pub async fn privacy() -> impl IntoResponse {
    PrivacyTemplate
}
