//! HTTP client for the storefront backend.

use thiserror::Error;
use torres_core::{Product, ProductId};

/// Error talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the storefront JSON API.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// List products, optionally filtered by search term and category label.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend responds with
    /// a non-success status.
    pub async fn list_products(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, ApiError> {
        let mut request = self.client.get(format!("{}/api/products", self.base_url));
        if let Some(search) = search {
            request = request.query(&[("search", search)]);
        }
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Fetch a single product; `None` if the backend reports 404.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures or other non-success
    /// statuses.
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/products/{id}", self.base_url))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(Some(response.json().await?))
    }

    /// Post an analytics event.
    ///
    /// Callers wanting fire-and-forget semantics go through
    /// [`crate::analytics::track`], which swallows this error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is rejected.
    pub async fn track_event(&self, event: &serde_json::Value) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/events", self.base_url))
            .json(event)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}
