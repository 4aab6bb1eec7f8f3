//! # API Client
//!
//! Main HTTP client for storefront API communication.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{CartEntry, Category, CategoryStatus, MenuItem, NewCartEntry};

use crate::config::StorefrontConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{CartService, CatalogService};
use super::menu::NewMenu;

/// HTTP client for the storefront REST API.
///
/// Every call is a single attempt: no retries and no request timeout beyond the
/// OS defaults. `reqwest::Client` pools connections internally, so the client is
/// cheap to share behind an `Arc`.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    storage_url: String,
}

impl ApiClient {
    /// Create a client for the API and storage locations in `config`.
    pub fn new(config: &StorefrontConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            storage_url: config.storage_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for `base_url`, deriving the storage location from it.
    pub fn with_base_url(base_url: &str) -> Self {
        let config = StorefrontConfig::from_lookup(|key| match key {
            "STOREFRONT_API_URL" => Some(base_url.to_string()),
            _ => None,
        })
        .unwrap_or_default();
        Self::new(&config)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/menus/category/3`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL of an image stored under `/storage/{path}`.
    pub fn image_url(&self, path: &str) -> String {
        shared::storage_url(&self.storage_url, path)
    }
}

/// Read the body of `response` and decode it as JSON.
///
/// Failing to read the body at all is a network failure; a body that is not the
/// expected JSON is a decode failure.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, what, "Response body read error");
        AppError::Network(e.to_string())
    })?;

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(error = %e, what, body_len = body.len(), "Response parse error");
        AppError::Decode(format!("{}: {}", what, e))
    })
}

/// Map a transport failure to `AppError::Network`, logging it on the way.
pub(crate) fn network_error(err: reqwest::Error, what: &str) -> AppError {
    tracing::error!(error = %err, what, "Network error");
    AppError::Network(err.to_string())
}

#[async_trait]
impl CatalogService for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        super::catalog::list_categories(self).await
    }

    async fn list_menus_by_category(&self, category_id: i64) -> Result<Vec<MenuItem>> {
        super::catalog::list_menus_by_category(self, category_id).await
    }

    async fn list_all_menus(&self) -> Result<Vec<MenuItem>> {
        super::catalog::list_all_menus(self).await
    }

    async fn create_category(&self, name: &str, status: CategoryStatus) -> Result<Category> {
        super::catalog::create_category(self, name, status).await
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        super::catalog::delete_category(self, id).await
    }

    async fn create_menu(&self, menu: &NewMenu) -> Result<MenuItem> {
        super::menu::create_menu(self, menu).await
    }
}

#[async_trait]
impl CartService for ApiClient {
    async fn list_cart(&self) -> Result<Vec<CartEntry>> {
        super::cart::list_cart(self).await
    }

    async fn add_to_cart(&self, entry: &NewCartEntry) -> Result<CartEntry> {
        super::cart::add_to_cart(self, entry).await
    }

    async fn remove_from_cart(&self, id: i64) -> Result<()> {
        super::cart::remove_from_cart(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ApiClient::with_base_url("http://10.0.0.5:8080/api/");
        assert_eq!(client.base_url(), "http://10.0.0.5:8080/api");
        assert_eq!(client.url("/carts/4"), "http://10.0.0.5:8080/api/carts/4");
        assert_eq!(
            client.image_url("menus/tea.jpg"),
            "http://10.0.0.5:8080/storage/menus/tea.jpg"
        );
    }
}
