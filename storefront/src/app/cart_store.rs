//! # Cart Store
//!
//! In-memory cart synchronized with the remote cart API.
//!
//! ## State Rules
//!
//! - [`CartStore::load`] replaces local state wholesale (last fetch wins, no merge).
//! - Quantity edits are client-authoritative: [`CartStore::increment`] and
//!   [`CartStore::decrement`] never touch the network. [`CartStore::drifted`]
//!   reports entries whose quantity no longer matches what the server last sent.
//! - `qty >= 1` always; decrement floors at 1 and never removes an entry.
//! - [`CartStore::remove`] only drops the entry after the server confirms.
//!
//! ## Cancellation
//!
//! Every async operation takes a [`CancellationToken`]. Reads are abandoned as
//! soon as the token fires; writes always run to completion on the server, but
//! their result is not committed locally once the token has fired.

use parking_lot::RwLock;
use shared::{CartEntry, MenuItem, NewCartEntry};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::single_flight::InFlight;
use super::summary::{summarize, OrderSummary, SummaryPolicy};
use super::{ensure_active, until_cancelled};
use crate::core::error::Result;
use crate::core::service::CartService;

/// Result of [`CartStore::add`]
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Server accepted the entry; it is now part of the local cart
    Added(CartEntry),
    /// An add for the same menu item is still in flight; no request was sent
    AlreadyPending,
}

/// Local quantity that differs from the last server-confirmed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QtyDrift {
    pub id: i64,
    pub synced_qty: u32,
    pub local_qty: u32,
}

#[derive(Debug, Default)]
struct CartState {
    entries: Vec<CartEntry>,
    /// qty per entry id as last confirmed by the server
    synced: HashMap<i64, u32>,
}

pub struct CartStore {
    service: Arc<dyn CartService>,
    state: RwLock<CartState>,
    adds: InFlight<i64>,
}

impl CartStore {
    pub fn new(service: Arc<dyn CartService>) -> Self {
        Self {
            service,
            state: RwLock::new(CartState::default()),
            adds: InFlight::new(),
        }
    }

    /// Fetch the server cart and replace local state with it.
    ///
    /// On failure the previous local state is kept.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<Vec<CartEntry>> {
        let start = std::time::Instant::now();

        let mut entries = until_cancelled(cancel, self.service.list_cart())
            .await
            .inspect_err(|e| warn!(error = %e, "Cart load failed, keeping previous state"))?;

        for entry in entries.iter_mut().filter(|e| e.qty == 0) {
            warn!(id = entry.id, "Server sent qty 0, clamping to 1");
            entry.qty = 1;
        }

        {
            let mut state = self.state.write();
            state.synced = entries.iter().map(|e| (e.id, e.qty)).collect();
            state.entries = entries.clone();
        }

        debug!(
            count = entries.len(),
            duration_ms = start.elapsed().as_millis(),
            "Cart loaded"
        );
        Ok(entries)
    }

    /// Raise an entry's quantity by one. Returns the new quantity, or `None`
    /// if no such entry exists.
    pub fn increment(&self, entry_id: i64) -> Option<u32> {
        let mut state = self.state.write();
        let entry = state.entries.iter_mut().find(|e| e.id == entry_id)?;
        entry.qty = entry.qty.saturating_add(1);
        Some(entry.qty)
    }

    /// Lower an entry's quantity by one, never below 1.
    pub fn decrement(&self, entry_id: i64) -> Option<u32> {
        let mut state = self.state.write();
        let entry = state.entries.iter_mut().find(|e| e.id == entry_id)?;
        if entry.qty > 1 {
            entry.qty -= 1;
        }
        Some(entry.qty)
    }

    /// Delete an entry on the server, then locally.
    ///
    /// If the server call fails the entry stays in the local cart.
    pub async fn remove(&self, entry_id: i64, cancel: &CancellationToken) -> Result<()> {
        self.service
            .remove_from_cart(entry_id)
            .await
            .inspect_err(|e| warn!(id = entry_id, error = %e, "Failed to remove item"))?;

        ensure_active(cancel)?;

        let mut state = self.state.write();
        state.entries.retain(|e| e.id != entry_id);
        state.synced.remove(&entry_id);
        info!(id = entry_id, "Item removed from cart");
        Ok(())
    }

    /// Add a menu item to the server cart with quantity 1.
    ///
    /// Concurrent adds of the same menu item collapse into one request: while
    /// one is in flight, further calls return [`AddOutcome::AlreadyPending`].
    pub async fn add(&self, item: &MenuItem, cancel: &CancellationToken) -> Result<AddOutcome> {
        let Some(_guard) = self.adds.try_acquire(item.id) else {
            debug!(menu_id = item.id, "Add to cart already in flight");
            return Ok(AddOutcome::AlreadyPending);
        };

        let request = NewCartEntry::from(item);
        let created = self
            .service
            .add_to_cart(&request)
            .await
            .inspect_err(|e| warn!(menu_id = item.id, error = %e, "Failed to add item to cart"))?;

        ensure_active(cancel)?;

        let mut state = self.state.write();
        state.synced.insert(created.id, created.qty);
        state.entries.push(created.clone());
        Ok(AddOutcome::Added(created))
    }

    /// `true` while an add for `menu_id` is in flight.
    pub fn is_adding(&self, menu_id: i64) -> bool {
        self.adds.is_pending(&menu_id)
    }

    pub fn snapshot(&self) -> Vec<CartEntry> {
        self.state.read().entries.clone()
    }

    pub fn get(&self, entry_id: i64) -> Option<CartEntry> {
        self.state.read().entries.iter().find(|e| e.id == entry_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Order summary of the current local cart.
    pub fn summary(&self, policy: &SummaryPolicy) -> OrderSummary {
        summarize(&self.state.read().entries, policy)
    }

    /// Entries whose local quantity differs from the last server-confirmed one.
    pub fn drifted(&self) -> Vec<QtyDrift> {
        let state = self.state.read();
        state
            .entries
            .iter()
            .filter_map(|e| {
                let synced_qty = *state.synced.get(&e.id)?;
                (synced_qty != e.qty).then_some(QtyDrift {
                    id: e.id,
                    synced_qty,
                    local_qty: e.qty,
                })
            })
            .collect()
    }
}
