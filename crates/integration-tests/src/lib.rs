//! Integration test harness for the storefront.
//!
//! [`TestApp::spawn`] serves the full application (routes, middleware,
//! static assets) on an ephemeral local port and returns a `reqwest` client
//! pointed at it. Add-to-cart intents are captured by a [`RecordingCart`].
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cosmo-integration-tests
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use cosmo_storefront::catalog::{Catalog, RemoteCatalog, StaticCatalog};
use cosmo_storefront::config::StorefrontConfig;
use cosmo_storefront::services::{CartIntent, CartService};
use cosmo_storefront::state::AppState;
use url::Url;

/// Cart service that remembers every intent it receives.
#[derive(Debug, Default)]
pub struct RecordingCart {
    intents: Mutex<Vec<CartIntent>>,
}

impl RecordingCart {
    /// Intents received so far, in order.
    pub fn intents(&self) -> Vec<CartIntent> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartService for RecordingCart {
    fn add_to_cart(&self, intent: &CartIntent) {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent.clone());
    }
}

/// A running storefront.
pub struct TestApp {
    pub base_url: String,
    /// Client that does not follow redirects.
    pub client: reqwest::Client,
    pub cart: Arc<RecordingCart>,
}

impl TestApp {
    /// Serve the embedded seed catalog only.
    ///
    /// # Panics
    ///
    /// Panics if the seed catalog or the listener cannot be set up.
    pub async fn spawn() -> Self {
        Self::spawn_with_catalog(seed_catalog(None)).await
    }

    /// Serve the seed catalog fronted by a catalog API at `api_base`
    /// (e.g., a `wiremock` server URI).
    ///
    /// # Panics
    ///
    /// Panics if the seed catalog or the listener cannot be set up.
    pub async fn spawn_with_remote(api_base: &str) -> Self {
        let base = Url::parse(&format!("{api_base}/api/v1/")).expect("valid mock base url");
        let client = cosmo_storefront::api::ApiClient::new(base, Duration::from_secs(5))
            .expect("api client");
        let remote = RemoteCatalog::new(client, Duration::from_secs(60), Duration::from_secs(1));
        Self::spawn_with_catalog(seed_catalog(Some(remote))).await
    }

    /// Serve `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn_with_catalog(catalog: Catalog) -> Self {
        let cart = Arc::new(RecordingCart::default());
        let state = AppState::with_parts(StorefrontConfig::default(), catalog, cart.clone());
        let app = cosmo_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("http client");

        Self {
            base_url: format!("http://{addr}"),
            client,
            cart,
        }
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`, returning status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get_html(&self, path: &str) -> (reqwest::StatusCode, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        (status, response.text().await.expect("response body"))
    }
}

fn seed_catalog(remote: Option<RemoteCatalog>) -> Catalog {
    Catalog::new(StaticCatalog::embedded().expect("embedded seed"), remote)
}
