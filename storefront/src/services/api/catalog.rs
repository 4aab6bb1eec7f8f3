//! # Catalog Endpoints
//!
//! Categories and menu listings.

use reqwest::StatusCode;
use shared::{Category, CategoryStatus, CreatedCategory, MenuItem, NewCategory};

use super::client::{decode_json, network_error, ApiClient};
use crate::core::error::{AppError, Result};

/// List all categories.
#[tracing::instrument(skip(client))]
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.url("/categories"))
        .send()
        .await
        .map_err(|e| network_error(e, "categories"))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Category fetch failed");
        return Err(AppError::OperationFailed(format!(
            "Failed to fetch categories: {}",
            status
        )));
    }

    let categories: Vec<Category> = decode_json(response, "categories").await?;
    tracing::debug!(
        count = categories.len(),
        duration_ms = start.elapsed().as_millis(),
        "Categories fetched"
    );
    Ok(categories)
}

/// List the menu items of one category.
#[tracing::instrument(skip(client), fields(category_id = category_id))]
pub async fn list_menus_by_category(client: &ApiClient, category_id: i64) -> Result<Vec<MenuItem>> {
    let start = std::time::Instant::now();
    let url = client.url(&format!("/menus/category/{}", category_id));

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| network_error(e, "menus by category"))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Menu fetch failed with non-success status"
        );
        return Err(AppError::OperationFailed(format!(
            "Failed to fetch menus for category {}: {}",
            category_id, status
        )));
    }

    let items: Vec<MenuItem> = decode_json(response, "menus by category").await?;
    tracing::debug!(
        count = items.len(),
        duration_ms = start.elapsed().as_millis(),
        "Menus fetched"
    );
    Ok(items)
}

/// List every menu item regardless of category.
pub async fn list_all_menus(client: &ApiClient) -> Result<Vec<MenuItem>> {
    let response = client
        .client
        .get(client.url("/menus"))
        .send()
        .await
        .map_err(|e| network_error(e, "menus"))?;

    if response.status().is_success() {
        decode_json(response, "menus").await
    } else {
        Err(AppError::OperationFailed(format!(
            "Failed to load menu items: {}",
            response.status()
        )))
    }
}

/// Create a category.
///
/// The server's answer is decoded whatever its status: a body with an `id` is
/// the stored category, anything else means the payload was rejected.
#[tracing::instrument(skip(client), fields(name = %name, status = %status))]
pub async fn create_category(client: &ApiClient, name: &str, status: CategoryStatus) -> Result<Category> {
    let request = NewCategory {
        name: name.to_string(),
        status,
    };

    let response = client
        .client
        .post(client.url("/categories"))
        .json(&request)
        .send()
        .await
        .map_err(|e| network_error(e, "create category"))?;

    let http_status = response.status();
    let created: CreatedCategory = decode_json(response, "create category").await?;

    match created.id {
        Some(id) => {
            tracing::info!(id, "Category created");
            Ok(Category {
                id,
                name: created.name.unwrap_or(request.name),
                status: created.status.unwrap_or(request.status),
            })
        }
        None => {
            tracing::warn!(status = http_status.as_u16(), "Category rejected by server");
            Err(AppError::Validation(
                "Failed to create category. Please try again.".to_string(),
            ))
        }
    }
}

/// Delete a category. Only `204 No Content` counts as success.
#[tracing::instrument(skip(client))]
pub async fn delete_category(client: &ApiClient, id: i64) -> Result<()> {
    let response = client
        .client
        .delete(client.url(&format!("/categories/{}", id)))
        .send()
        .await
        .map_err(|e| network_error(e, "delete category"))?;

    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        tracing::info!("Category deleted");
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "Category delete failed");
        Err(AppError::OperationFailed(format!(
            "Failed to delete category: {}",
            status
        )))
    }
}

/// Case-insensitive substring filter on item names, preserving order.
///
/// The query is matched as typed: only an empty query returns every item.
pub fn search_menus<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .collect()
}
