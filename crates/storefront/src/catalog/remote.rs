//! Remote catalog read through the catalog API, cached with `moka`.

use std::sync::Arc;
use std::time::Duration;

use cosmo_core::{ProductCategory, RawProduct};
use moka::future::Cache;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::{ApiClient, ApiError};

const PRODUCTS_PATH: &str = "products";
const CATEGORIES_PATH: &str = "categories";

/// Cache key for listing responses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Categories,
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Arc<[RawProduct]>),
    Categories(Arc<[ProductCategory]>),
}

/// A listing response: a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(alias = "products", alias = "categories", alias = "items")]
        data: Vec<Value>,
    },
}

impl Listing {
    fn into_entries(self) -> Vec<Value> {
        match self {
            Self::Bare(entries) | Self::Wrapped { data: entries } => entries,
        }
    }
}

/// Catalog backed by the REST API.
///
/// Successful listings are cached for the configured TTL. A failed fetch is
/// remembered for a shorter window, during which calls fail fast with
/// [`ApiError::RecentFailure`] instead of waiting on the API again.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: ApiClient,
    cache: Cache<CacheKey, CacheValue>,
    failures: Cache<CacheKey, Arc<str>>,
}

impl RemoteCatalog {
    /// Wrap `client`, caching listings for `ttl` and failures for `failure_ttl`.
    #[must_use]
    pub fn new(client: ApiClient, ttl: Duration, failure_ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(16).time_to_live(ttl).build();
        let failures = Cache::builder()
            .max_capacity(16)
            .time_to_live(failure_ttl)
            .build();
        Self {
            client,
            cache,
            failures,
        }
    }

    /// The underlying API client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetch all products.
    ///
    /// Entries that are not JSON objects are skipped; every object is kept,
    /// however incomplete.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not a listing, or
    /// a previous fetch failed within the failure window.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<[RawProduct]>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for products");
            return Ok(products);
        }
        self.check_failure(&CacheKey::Products).await?;

        let products = self
            .remember_failure(CacheKey::Products, self.fetch_products().await)
            .await?;

        debug!(count = products.len(), "Fetched products");
        self.cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// Fetch all categories. Malformed entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not a listing, or
    /// a previous fetch failed within the failure window.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Arc<[ProductCategory]>, ApiError> {
        if let Some(CacheValue::Categories(categories)) =
            self.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }
        self.check_failure(&CacheKey::Categories).await?;

        let categories = self
            .remember_failure(CacheKey::Categories, self.fetch_categories().await)
            .await?;

        debug!(count = categories.len(), "Fetched categories");
        self.cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(Arc::clone(&categories)),
            )
            .await;

        Ok(categories)
    }

    /// Fetch the product listing straight from the API.
    ///
    /// Neither reads nor writes the listing or failure caches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a listing.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> Result<(), ApiError> {
        self.fetch_products().await.map(|_| ())
    }

    /// Drop all cached listings and remembered failures.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.failures.invalidate_all();
    }

    async fn fetch_products(&self) -> Result<Arc<[RawProduct]>, ApiError> {
        let listing: Listing = self.client.get_json(PRODUCTS_PATH).await?;
        Ok(listing
            .into_entries()
            .into_iter()
            .filter(Value::is_object)
            .map(RawProduct::from_value)
            .collect())
    }

    async fn fetch_categories(&self) -> Result<Arc<[ProductCategory]>, ApiError> {
        let listing: Listing = self.client.get_json(CATEGORIES_PATH).await?;
        Ok(listing
            .into_entries()
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    async fn check_failure(&self, key: &CacheKey) -> Result<(), ApiError> {
        match self.failures.get(key).await {
            Some(reason) => {
                debug!(?key, "Skipping fetch after recent failure");
                Err(ApiError::RecentFailure(reason.to_string()))
            }
            None => Ok(()),
        }
    }

    async fn remember_failure<T>(
        &self,
        key: CacheKey,
        result: Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        if let Err(e) = &result {
            self.failures.insert(key, Arc::from(e.to_string())).await;
        }
        result
    }
}
