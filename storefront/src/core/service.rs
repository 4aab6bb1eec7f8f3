//! # Service Traits
//!
//! Seams between the stores and the remote API. [`ApiClient`](crate::services::api::ApiClient)
//! implements both; tests substitute in-memory fakes.

use async_trait::async_trait;
use shared::{CartEntry, Category, CategoryStatus, MenuItem, NewCartEntry};

use crate::core::error::Result;
use crate::services::api::NewMenu;

/// Catalog endpoints: categories and menu items.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// `GET /menus/category/{id}`
    async fn list_menus_by_category(&self, category_id: i64) -> Result<Vec<MenuItem>>;

    /// `GET /menus`
    async fn list_all_menus(&self) -> Result<Vec<MenuItem>>;

    /// `POST /categories`. Fails with `Validation` when the response carries no id.
    async fn create_category(&self, name: &str, status: CategoryStatus) -> Result<Category>;

    /// `DELETE /categories/{id}`. Only `204 No Content` counts as success.
    async fn delete_category(&self, id: i64) -> Result<()>;

    /// `POST /menus` (multipart, with image upload)
    async fn create_menu(&self, menu: &NewMenu) -> Result<MenuItem>;
}

/// Remote cart endpoints.
#[async_trait]
pub trait CartService: Send + Sync {
    /// `GET /carts`
    async fn list_cart(&self) -> Result<Vec<CartEntry>>;

    /// `POST /carts`
    async fn add_to_cart(&self, entry: &NewCartEntry) -> Result<CartEntry>;

    /// `DELETE /carts/{id}`. Any 2xx counts as success.
    async fn remove_from_cart(&self, id: i64) -> Result<()>;
}
