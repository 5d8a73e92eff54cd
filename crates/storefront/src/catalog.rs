//! Catalog loader.
//!
//! Loads the product feed (`{"products": [...]}`) from an HTTP URL via
//! `reqwest` or from a local JSON file. Responses are cached in-process
//! with a TTL so a session does not re-fetch the feed on every lookup;
//! failures are returned as values, logged by the caller, and never cached.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use cartwheel_core::Product;

/// Errors from loading the catalog feed.
///
/// Every failure is terminal for that load only; the engine treats the
/// catalog as unavailable and a later load starts fresh.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP fetch failed (connection, status, or body decode).
    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local feed file could not be read.
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Feed payload was not valid catalog JSON.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the product feed lives.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Fetch over HTTP(S).
    Url(Url),
    /// Read from a local JSON file.
    File(PathBuf),
}

/// Wire shape of the feed.
#[derive(Debug, Deserialize)]
struct CatalogFeed {
    products: Vec<Product>,
}

/// Client for the product catalog feed.
///
/// Cheaply cloneable; successful loads are cached for the configured TTL.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    source: CatalogSource,
    cache: Cache<(), Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a catalog client over `source`, caching successful loads for
    /// `ttl`.
    #[must_use]
    pub fn new(source: CatalogSource, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                source,
                cache,
            }),
        }
    }

    /// Load the product catalog, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the feed cannot be fetched, read, or
    /// parsed. Errors are never cached.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(products) = self.inner.cache.get(&()).await {
            debug!(count = products.len(), "catalog served from cache");
            return Ok(products);
        }

        let feed = match &self.inner.source {
            CatalogSource::Url(url) => {
                let response = self
                    .inner
                    .client
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?;
                response.json::<CatalogFeed>().await?
            }
            CatalogSource::File(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                serde_json::from_str::<CatalogFeed>(&raw)?
            }
        };

        let products = Arc::new(feed.products);
        debug!(count = products.len(), "catalog loaded");
        self.inner.cache.insert((), products.clone()).await;
        Ok(products)
    }
}
