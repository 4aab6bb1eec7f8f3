//! In-memory service fakes shared by the store tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{CartEntry, Category, CategoryRef, CategoryStatus, MenuItem, NewCartEntry};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::core::error::{AppError, Result};
use crate::core::service::{CartService, CatalogService};
use crate::services::api::NewMenu;

pub(crate) fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        status: CategoryStatus::Active,
    }
}

pub(crate) fn menu_item(id: i64, name: &str, category_id: i64, category_name: &str, price: f64) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        category: CategoryRef {
            id: category_id,
            name: category_name.to_string(),
        },
        image: format!("menus/{}.jpg", id),
        price,
        stock: 10,
        status: "active".to_string(),
    }
}

pub(crate) fn cart_entry(id: i64, price: f64, qty: u32) -> CartEntry {
    CartEntry {
        id,
        name: format!("entry-{}", id),
        category: "Food".to_string(),
        img: format!("menus/{}.jpg", id),
        price,
        qty,
    }
}

#[derive(Default)]
pub(crate) struct FakeCatalog {
    categories: Mutex<Vec<Category>>,
    menus: Mutex<HashMap<i64, Vec<MenuItem>>>,
    menu_calls: Mutex<Vec<i64>>,
    failing: Mutex<HashSet<i64>>,
    gates: Mutex<HashMap<i64, Arc<Notify>>>,
    fail_categories: AtomicBool,
    next_id: AtomicI64,
}

impl FakeCatalog {
    pub(crate) fn new(categories: Vec<Category>, menus: Vec<(i64, Vec<MenuItem>)>) -> Self {
        let next_id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            categories: Mutex::new(categories),
            menus: Mutex::new(menus.into_iter().collect()),
            next_id: AtomicI64::new(next_id),
            ..Self::default()
        }
    }

    /// Make `list_menus_by_category(id)` fail (or succeed again).
    pub(crate) fn fail_menus(&self, category_id: i64, fail: bool) {
        let mut failing = self.failing.lock();
        if fail {
            failing.insert(category_id);
        } else {
            failing.remove(&category_id);
        }
    }

    pub(crate) fn fail_categories(&self, fail: bool) {
        self.fail_categories.store(fail, Ordering::SeqCst);
    }

    /// Hold `list_menus_by_category(id)` until the returned handle is notified.
    pub(crate) fn gate(&self, category_id: i64) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().insert(category_id, Arc::clone(&notify));
        notify
    }

    /// Category ids passed to `list_menus_by_category`, in call order.
    pub(crate) fn menu_calls(&self) -> Vec<i64> {
        self.menu_calls.lock().clone()
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        if self.fail_categories.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        Ok(self.categories.lock().clone())
    }

    async fn list_menus_by_category(&self, category_id: i64) -> Result<Vec<MenuItem>> {
        self.menu_calls.lock().push(category_id);

        let gate = self.gates.lock().get(&category_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.lock().contains(&category_id) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        Ok(self.menus.lock().get(&category_id).cloned().unwrap_or_default())
    }

    async fn list_all_menus(&self) -> Result<Vec<MenuItem>> {
        Ok(self.menus.lock().values().flatten().cloned().collect())
    }

    async fn create_category(&self, name: &str, status: CategoryStatus) -> Result<Category> {
        if name == "reject" {
            return Err(AppError::Validation(
                "Failed to create category. Please try again.".to_string(),
            ));
        }
        let created = Category {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            status,
        };
        self.categories.lock().push(created.clone());
        Ok(created)
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        let mut categories = self.categories.lock();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(AppError::OperationFailed(
                "Failed to delete category: 404 Not Found".to_string(),
            ));
        }
        Ok(())
    }

    async fn create_menu(&self, menu: &NewMenu) -> Result<MenuItem> {
        let category_name = self
            .categories
            .lock()
            .iter()
            .find(|c| c.id == menu.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let created = MenuItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: menu.name.clone(),
            description: menu.description.clone(),
            category: CategoryRef {
                id: menu.category_id,
                name: category_name,
            },
            image: format!("menus/{}", menu.image_file_name()),
            price: menu.price,
            stock: i64::from(menu.stock),
            status: menu.status.clone(),
        };
        self.menus
            .lock()
            .entry(menu.category_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub(crate) struct FakeCart {
    entries: Mutex<Vec<CartEntry>>,
    next_id: AtomicI64,
    add_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_add: AtomicBool,
    fail_remove: AtomicBool,
    add_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeCart {
    pub(crate) fn new(entries: Vec<CartEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            entries: Mutex::new(entries),
            next_id: AtomicI64::new(next_id),
            ..Self::default()
        }
    }

    pub(crate) fn set_entries(&self, entries: Vec<CartEntry>) {
        *self.entries.lock() = entries;
    }

    pub(crate) fn remote_qty(&self, id: i64) -> Option<u32> {
        self.entries.lock().iter().find(|e| e.id == id).map(|e| e.qty)
    }

    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_add(&self, fail: bool) {
        self.fail_add.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_remove(&self, fail: bool) {
        self.fail_remove.store(fail, Ordering::SeqCst);
    }

    /// Hold every `add_to_cart` until the returned handle is notified.
    pub(crate) fn gate_adds(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.add_gate.lock() = Some(Arc::clone(&notify));
        notify
    }
}

#[async_trait]
impl CartService for FakeCart {
    async fn list_cart(&self) -> Result<Vec<CartEntry>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        Ok(self.entries.lock().clone())
    }

    async fn add_to_cart(&self, entry: &NewCartEntry) -> Result<CartEntry> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.add_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail_add.load(Ordering::SeqCst) {
            return Err(AppError::OperationFailed("Failed to add item to cart.".to_string()));
        }

        let created = CartEntry {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: entry.name.clone(),
            category: entry.category.clone(),
            img: entry.img.clone(),
            price: entry.price,
            qty: entry.qty,
        };
        self.entries.lock().push(created.clone());
        Ok(created)
    }

    async fn remove_from_cart(&self, id: i64) -> Result<()> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(AppError::OperationFailed("Failed to remove item: 500".to_string()));
        }
        self.entries.lock().retain(|e| e.id != id);
        Ok(())
    }
}
