//! Catalog API client.
//!
//! # Architecture
//!
//! - One preconfigured `reqwest` client per base URL (`https://<host>/api/v1`)
//! - `Content-Type: application/json` is a default header on every request
//! - Single request/response per call: no retries, no backoff. Each request
//!   carries the configured timeout; dropping the returned future cancels it.
//! - Failures surface to the caller as [`ApiError`]; callers decide whether to
//!   fall back (see [`crate::catalog::Catalog`])
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmo_storefront::api::ApiClient;
//!
//! let client = ApiClient::new(base_url, Duration::from_secs(10))?;
//! let products: Vec<RawProduct> = client.get_json("products").await?;
//! ```

mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Errors that can occur when calling the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the server.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A resource path could not be joined onto the base URL.
    #[error("Invalid resource path: {0}")]
    InvalidPath(#[from] url::ParseError),

    /// The last call to this resource failed recently and has not been retried.
    #[error("Catalog API recently failed: {0}")]
    RecentFailure(String),
}

impl ApiError {
    /// Whether the request failed before any HTTP response arrived.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The HTTP status, for status errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
