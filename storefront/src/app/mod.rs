//! # Storefront Application Layer
//!
//! Stateful stores sitting between the screens (or the headless binary) and
//! the HTTP services.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storefront (facade)                                         │
//! │   ├── CategoryMenuOrchestrator  category tabs + menu cache   │
//! │   ├── CartStore                 cart entries, local qty      │
//! │   ├── CatalogAdmin              category/menu management     │
//! │   ├── Session                   client-side login            │
//! │   └── SummaryPolicy             tax/fee rules for summaries  │
//! └───────────────┬──────────────────────────────────────────────┘
//!                 │ Arc<dyn CatalogService> / Arc<dyn CartService>
//!                 ▼
//!        services::api::ApiClient (reqwest)
//! ```
//!
//! ## State Management
//!
//! Each store keeps its state behind a `parking_lot::RwLock`. Locks are taken
//! for a single read or commit and are never held across `.await`: a store
//! drops its guard, awaits the service, then re-acquires to commit.
//!
//! ## Cancellation
//!
//! Every async store operation takes a [`CancellationToken`]:
//! - reads race the token and return [`AppError::Cancelled`] without committing
//! - writes run to completion on the server, but skip the local commit when
//!   the token fired in the meantime

pub mod cart_store;
pub mod catalog_admin;
pub mod notice;
pub mod orchestrator;
pub mod session;
pub mod single_flight;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use cart_store::{AddOutcome, CartStore, QtyDrift};
pub use catalog_admin::CatalogAdmin;
pub use notice::{Notice, NoticeLevel};
pub use orchestrator::{CategoryMenuOrchestrator, FetchState};
pub use session::Session;
pub use summary::{summarize, OrderSummary, SummaryPolicy};

use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::StorefrontConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{CartService, CatalogService};
use crate::services::api::ApiClient;

/// Run `fut` unless `cancel` fires first.
pub(crate) async fn until_cancelled<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        result = fut => result,
    }
}

/// Fail with `Cancelled` if the token has fired.
pub(crate) fn ensure_active(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    Ok(())
}

/// All storefront stores wired to one set of services.
pub struct Storefront {
    pub menus: CategoryMenuOrchestrator,
    pub cart: CartStore,
    pub admin: CatalogAdmin,
    pub session: Session,
    pub policy: SummaryPolicy,
}

impl Storefront {
    /// Wire every store to an HTTP client built from `config`.
    pub fn new(config: &StorefrontConfig) -> Self {
        let api = Arc::new(ApiClient::new(config));
        Self::with_services(api.clone(), api, config.summary_policy())
    }

    pub fn with_services(
        catalog: Arc<dyn CatalogService>,
        cart: Arc<dyn CartService>,
        policy: SummaryPolicy,
    ) -> Self {
        Self {
            menus: CategoryMenuOrchestrator::new(Arc::clone(&catalog)),
            cart: CartStore::new(cart),
            admin: CatalogAdmin::new(catalog),
            session: Session::new(),
            policy,
        }
    }

    /// Add a menu item from the loaded menus to the cart.
    ///
    /// The item is looked up among fetched categories first, then in the admin
    /// menu list.
    pub async fn add_to_cart(&self, menu_id: i64, cancel: &CancellationToken) -> Result<AddOutcome> {
        let item = self
            .menus
            .find_item(menu_id)
            .or_else(|| self.admin.menus().into_iter().find(|m| m.id == menu_id))
            .ok_or_else(|| AppError::Validation(format!("Unknown menu item: {}", menu_id)))?;

        self.cart.add(&item, cancel).await
    }

    /// Order summary of the current cart under the configured policy.
    pub fn summary(&self) -> OrderSummary {
        self.cart.summary(&self.policy)
    }
}
