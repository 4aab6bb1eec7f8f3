//! # Catalog Administration
//!
//! Backing store for the category and menu management screens: the full
//! category list, the full menu list, and create/delete actions that keep
//! both lists in step with the server.
//!
//! Forms are validated before any request is sent. A successful create
//! appends the server's record; a successful delete filters the record out.
//! Failures leave the local lists untouched.

use parking_lot::RwLock;
use shared::{Category, CategoryStatus, MenuItem};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{ensure_active, until_cancelled};
use crate::core::error::Result;
use crate::core::service::CatalogService;
use crate::services::api::{search_menus, NewMenu};
use crate::utils::validation::{validate_category_form, MenuForm};

#[derive(Debug, Default)]
struct AdminState {
    categories: Vec<Category>,
    menus: Vec<MenuItem>,
}

pub struct CatalogAdmin {
    catalog: Arc<dyn CatalogService>,
    state: RwLock<AdminState>,
}

impl CatalogAdmin {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            state: RwLock::new(AdminState::default()),
        }
    }

    pub async fn load_categories(&self, cancel: &CancellationToken) -> Result<Vec<Category>> {
        let categories = until_cancelled(cancel, self.catalog.list_categories())
            .await
            .inspect_err(|e| warn!(error = %e, "Error fetching categories"))?;
        self.state.write().categories = categories.clone();
        Ok(categories)
    }

    pub async fn load_menus(&self, cancel: &CancellationToken) -> Result<Vec<MenuItem>> {
        let menus = until_cancelled(cancel, self.catalog.list_all_menus())
            .await
            .inspect_err(|e| warn!(error = %e, "Error fetching menus"))?;
        self.state.write().menus = menus.clone();
        Ok(menus)
    }

    /// Validate and create a category, appending it to the local list.
    pub async fn create_category(
        &self,
        name: &str,
        status: &str,
        cancel: &CancellationToken,
    ) -> Result<Category> {
        validate_category_form(name, status).into_result()?;
        let status = CategoryStatus::parse(status).unwrap_or_default();

        let created = self
            .catalog
            .create_category(name.trim(), status)
            .await
            .inspect_err(|e| warn!(name = %name, error = %e, "Error creating category"))?;
        ensure_active(cancel)?;

        info!(id = created.id, name = %created.name, "Category created");
        self.state.write().categories.push(created.clone());
        Ok(created)
    }

    pub async fn delete_category(&self, id: i64, cancel: &CancellationToken) -> Result<()> {
        self.catalog
            .delete_category(id)
            .await
            .inspect_err(|e| warn!(id, error = %e, "Error deleting category"))?;
        ensure_active(cancel)?;

        info!(id, "Category deleted");
        self.state.write().categories.retain(|c| c.id != id);
        Ok(())
    }

    /// Validate the menu form and create the menu item.
    pub async fn create_menu(&self, form: &MenuForm, cancel: &CancellationToken) -> Result<MenuItem> {
        let menu = NewMenu::from_form(form)?;

        let created = self
            .catalog
            .create_menu(&menu)
            .await
            .inspect_err(|e| warn!(name = %menu.name, error = %e, "Error creating menu"))?;
        ensure_active(cancel)?;

        info!(id = created.id, name = %created.name, "Menu created");
        self.state.write().menus.push(created.clone());
        Ok(created)
    }

    /// Case-insensitive name search over the loaded menu list.
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        let state = self.state.read();
        search_menus(&state.menus, query).into_iter().cloned().collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.read().categories.clone()
    }

    pub fn menus(&self) -> Vec<MenuItem> {
        self.state.read().menus.clone()
    }
}
