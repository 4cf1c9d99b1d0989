//! Navigation targets emitted by rendered pages.

use std::fmt;

use crate::types::id::ProductId;

/// A storefront navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Catalog browser.
    Products,
    /// Product detail page. An empty id degrades to [`Route::Products`].
    ProductDetail(ProductId),
    Register,
    Terms,
    Privacy,
}

impl Route {
    /// The link target for this route.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products => "/product".to_string(),
            Self::ProductDetail(id) if id.is_empty() => "/product".to_string(),
            Self::ProductDetail(id) => format!("/product/{}", urlencoding::encode(id.as_str())),
            Self::Register => "/register".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::Privacy => "/privacy".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
