//! # Menu Administration Endpoint
//!
//! Multipart menu creation with image upload.

use reqwest::multipart::{Form, Part};
use shared::MenuItem;
use std::path::{Path, PathBuf};

use super::client::{decode_json, network_error, ApiClient};
use crate::core::error::{AppError, Result};
use crate::utils::validation::{validate_menu_form, MenuForm};

/// Validated menu create request.
///
/// Built only through [`NewMenu::from_form`], so every field has already passed
/// client-side validation by the time a request is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub description: String,
    pub status: String,
    pub stock: u32,
    pub price: f64,
    pub category_id: i64,
    /// Local image file uploaded as the `image` part
    pub image: PathBuf,
}

impl NewMenu {
    pub fn from_form(form: &MenuForm) -> Result<Self> {
        validate_menu_form(form).into_result()?;

        // Validation guarantees these parse and are present
        let stock = form.stock.trim().parse::<u32>().map_err(|_| invalid_number("stock"))?;
        let price = form.price.trim().parse::<f64>().map_err(|_| invalid_number("price"))?;
        let category_id = form.category_id.ok_or_else(|| invalid_number("category"))?;
        let image = form.image.clone().ok_or_else(|| invalid_number("image"))?;

        Ok(Self {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            status: if form.status.trim().is_empty() {
                "active".to_string()
            } else {
                form.status.trim().to_string()
            },
            stock,
            price,
            category_id,
            image,
        })
    }

    /// File name sent with the image part: the last path segment.
    pub fn image_file_name(&self) -> String {
        image_file_name(&self.image)
    }
}

fn invalid_number(field: &str) -> AppError {
    AppError::Validation(format!("Invalid {}", field))
}

fn image_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.jpg".to_string())
}

/// Create a menu item, uploading its image.
#[tracing::instrument(skip(client, menu), fields(name = %menu.name, category_id = menu.category_id))]
pub async fn create_menu(client: &ApiClient, menu: &NewMenu) -> Result<MenuItem> {
    let start = std::time::Instant::now();

    let bytes = tokio::fs::read(&menu.image).await.map_err(|e| {
        tracing::warn!(error = %e, path = %menu.image.display(), "Image read failed");
        AppError::Validation(format!("Cannot read image {}: {}", menu.image.display(), e))
    })?;

    let image = Part::bytes(bytes)
        .file_name(menu.image_file_name())
        .mime_str("image/jpeg")
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let form = Form::new()
        .text("name", menu.name.clone())
        .text("description", menu.description.clone())
        .text("status", menu.status.clone())
        .text("stock", menu.stock.to_string())
        .text("price", menu.price.to_string())
        .text("category_id", menu.category_id.to_string())
        .part("image", image);

    let response = client
        .client
        .post(client.url("/menus"))
        .multipart(form)
        .send()
        .await
        .map_err(|e| network_error(e, "create menu"))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Menu create failed"
        );
        return Err(AppError::OperationFailed("Failed to create menu".to_string()));
    }

    let created: MenuItem = decode_json(response, "create menu").await?;
    tracing::info!(
        id = created.id,
        duration_ms = start.elapsed().as_millis(),
        "Menu created"
    );
    Ok(created)
}
