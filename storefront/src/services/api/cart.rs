//! # Cart Endpoints
//!
//! Remote cart listing, add and remove.

use shared::{CartEntry, NewCartEntry};

use super::client::{decode_json, network_error, ApiClient};
use crate::core::error::{AppError, Result};

/// Fetch the server-side cart.
#[tracing::instrument(skip(client))]
pub async fn list_cart(client: &ApiClient) -> Result<Vec<CartEntry>> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.url("/carts"))
        .send()
        .await
        .map_err(|e| network_error(e, "cart"))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Cart fetch failed");
        return Err(AppError::OperationFailed(format!("Failed to fetch cart: {}", status)));
    }

    let entries: Vec<CartEntry> = decode_json(response, "cart").await?;
    tracing::debug!(
        count = entries.len(),
        duration_ms = start.elapsed().as_millis(),
        "Cart fetched"
    );
    Ok(entries)
}

/// Add an entry to the server-side cart.
#[tracing::instrument(skip(client, entry), fields(name = %entry.name))]
pub async fn add_to_cart(client: &ApiClient, entry: &NewCartEntry) -> Result<CartEntry> {
    let response = client
        .client
        .post(client.url("/carts"))
        .json(entry)
        .send()
        .await
        .map_err(|e| network_error(e, "add to cart"))?;

    let status = response.status();
    if status.is_success() {
        let created: CartEntry = decode_json(response, "add to cart").await?;
        tracing::info!(id = created.id, "Item added to cart");
        Ok(created)
    } else {
        tracing::warn!(status = status.as_u16(), "Add to cart failed");
        Err(AppError::OperationFailed("Failed to add item to cart.".to_string()))
    }
}

/// Remove an entry from the server-side cart. Any 2xx counts as success.
#[tracing::instrument(skip(client))]
pub async fn remove_from_cart(client: &ApiClient, id: i64) -> Result<()> {
    let response = client
        .client
        .delete(client.url(&format!("/carts/{}", id)))
        .send()
        .await
        .map_err(|e| network_error(e, "remove from cart"))?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        tracing::warn!(status = status.as_u16(), "Failed to remove item");
        Err(AppError::OperationFailed(format!(
            "Failed to remove item: {}",
            status
        )))
    }
}
