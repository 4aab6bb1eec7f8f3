//! # Category Menu Orchestrator
//!
//! Coordinates category selection with on-demand, memoized menu fetches.
//!
//! ## State Machine
//!
//! ```text
//!          select(name)              fetch ok
//!   Idle ───────────────▶ Fetching ───────────▶ Cached(name)
//!                            │
//!                            │ fetch error
//!                            ▼
//!                      FetchFailed(name) ── select(name) ──▶ Fetching (retry)
//! ```
//!
//! ## Caching
//!
//! Items are cached per category name for the whole session: no TTL, no
//! eviction. A cached name never triggers another request. While a fetch for a
//! name is in flight, selecting that name again joins it instead of issuing a
//! second request. Failures are not cached.
//!
//! ## Cancellation
//!
//! The fetch for a name runs on a spawned task that belongs to no single
//! caller. A caller's token only ends its own wait: the fetch still settles,
//! fills the cache and releases the name for later selections. When the
//! cancelled selection is still the newest, the status drops back to `Idle`
//! and stays there when the fetch settles.
//!
//! ## Stale Responses
//!
//! Every selection bumps a generation counter, and each in-flight fetch records
//! the generation of the newest selection waiting on it. When a fetch settles,
//! its items always land in the cache under their own name, but the visible
//! state only moves if no newer selection has happened since. A slow response
//! for an earlier tab can therefore never replace the state of the current one.

use parking_lot::RwLock;
use shared::{Category, MenuItem};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::until_cancelled;
use crate::core::error::{AppError, Result};
use crate::core::service::CatalogService;

/// Visible state of the active category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching(String),
    Cached(String),
    FetchFailed(String),
}

#[derive(Debug, Default)]
struct MenuState {
    categories: Vec<Category>,
    active: Option<String>,
    generation: u64,
    status: FetchState,
    cache: HashMap<String, Vec<MenuItem>>,
    /// name → generation of the newest selection waiting on the fetch
    in_flight: HashMap<String, u64>,
}

pub struct CategoryMenuOrchestrator {
    catalog: Arc<dyn CatalogService>,
    state: Arc<RwLock<MenuState>>,
}

impl CategoryMenuOrchestrator {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            state: Arc::new(RwLock::new(MenuState::default())),
        }
    }

    /// Fetch the category list, replacing the known one, and return the
    /// first category name.
    ///
    /// The menu cache is kept: it lives for the whole session.
    pub async fn load_categories(&self, cancel: &CancellationToken) -> Result<Option<String>> {
        let categories = until_cancelled(cancel, self.catalog.list_categories())
            .await
            .inspect_err(|e| warn!(error = %e, "Error fetching categories"))?;

        debug!(count = categories.len(), "Categories loaded");
        let first = categories.first().map(|c| c.name.clone());
        self.state.write().categories = categories;
        Ok(first)
    }

    /// Load categories and select the first one, as the home screen does on focus.
    ///
    /// Returns `Ok(None)` when the catalog has no categories.
    pub async fn open(&self, cancel: &CancellationToken) -> Result<Option<FetchState>> {
        match self.load_categories(cancel).await? {
            Some(first) => self.select_category(&first, cancel).await.map(Some),
            None => Ok(None),
        }
    }

    /// Make `name` the active category, fetching its items unless cached.
    ///
    /// Returns the state of `name` after the call:
    /// - `Cached(name)` when the items are available (cache hit or fetched now)
    /// - `Fetching(name)` when another call's fetch for `name` is still in flight
    ///
    /// Fails with `Cancelled` when `cancel` fires before the fetch settles;
    /// the fetch itself keeps running for any other selection of `name`.
    ///
    /// Fails with `Validation` for a name absent from the loaded category list,
    /// before any request is sent.
    pub async fn select_category(&self, name: &str, cancel: &CancellationToken) -> Result<FetchState> {
        let (category_id, generation) = {
            let mut state = self.state.write();

            if state.cache.contains_key(name) {
                state.generation += 1;
                state.active = Some(name.to_string());
                state.status = FetchState::Cached(name.to_string());
                debug!(category = %name, "Menu cache hit");
                return Ok(FetchState::Cached(name.to_string()));
            }

            let category_id = state
                .categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.id)
                .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", name)))?;

            state.generation += 1;
            let generation = state.generation;
            state.active = Some(name.to_string());
            state.status = FetchState::Fetching(name.to_string());

            if let Some(waiting) = state.in_flight.get_mut(name) {
                *waiting = generation;
                debug!(category = %name, "Joining in-flight menu fetch");
                return Ok(FetchState::Fetching(name.to_string()));
            }

            state.in_flight.insert(name.to_string(), generation);
            (category_id, generation)
        };

        let fetch = self.spawn_fetch(name, category_id);
        let settled = until_cancelled(cancel, async {
            fetch
                .await
                .map_err(|e| AppError::OperationFailed(format!("Menu fetch task failed: {}", e)))?
        })
        .await;

        match settled {
            Ok(()) => Ok(FetchState::Cached(name.to_string())),
            Err(AppError::Cancelled) => {
                debug!(category = %name, "Menu selection cancelled");
                let mut state = self.state.write();
                if state.generation == generation {
                    // Retire the selection so the shared fetch leaves the status alone
                    state.generation += 1;
                    state.status = FetchState::Idle;
                }
                Err(AppError::Cancelled)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the items of `name` on a task of its own.
    ///
    /// The task owns the `in_flight` entry for `name`: it removes it, caches
    /// the items and moves the status whether or not any caller still awaits
    /// the handle.
    fn spawn_fetch(&self, name: &str, category_id: i64) -> JoinHandle<Result<()>> {
        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);
        let name = name.to_string();

        tokio::spawn(async move {
            let start = std::time::Instant::now();
            let result = catalog.list_menus_by_category(category_id).await;

            let mut state = state.write();
            let waiting = state.in_flight.remove(&name);
            let is_current = waiting == Some(state.generation);

            match result {
                Ok(items) => {
                    info!(
                        category = %name,
                        count = items.len(),
                        current = is_current,
                        duration_ms = start.elapsed().as_millis(),
                        "Menu fetched"
                    );
                    if is_current {
                        state.status = FetchState::Cached(name.clone());
                    }
                    state.cache.insert(name, items);
                    Ok(())
                }
                Err(e) => {
                    warn!(category = %name, error = %e, "Error fetching menu");
                    if is_current {
                        state.status = FetchState::FetchFailed(name);
                    }
                    Err(e)
                }
            }
        })
    }

    /// Cached items for `name`; empty while a fetch is outstanding or if never fetched.
    pub fn get_items_for(&self, name: &str) -> Vec<MenuItem> {
        self.state.read().cache.get(name).cloned().unwrap_or_default()
    }

    /// Items of the active category.
    pub fn active_items(&self) -> Vec<MenuItem> {
        let state = self.state.read();
        state
            .active
            .as_ref()
            .and_then(|name| state.cache.get(name))
            .cloned()
            .unwrap_or_default()
    }

    pub fn active_category(&self) -> Option<String> {
        self.state.read().active.clone()
    }

    pub fn state(&self) -> FetchState {
        self.state.read().status.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.read().categories.clone()
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.state.read().cache.contains_key(name)
    }

    /// Find a cached menu item by id across all categories.
    pub fn find_item(&self, menu_id: i64) -> Option<MenuItem> {
        self.state
            .read()
            .cache
            .values()
            .flatten()
            .find(|item| item.id == menu_id)
            .cloned()
    }
}
