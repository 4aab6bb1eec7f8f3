//! # Storefront Client - Library Root
//!
//! Client core of a food-ordering storefront: catalog browsing by category,
//! an in-memory cart synchronized with a REST API, and order summaries.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - CartStore, CategoryMenuOrchestrator,      │
//! │              CatalogAdmin, Session, order summary      │
//! │  services  - reqwest ApiClient (catalog, menu, cart)   │
//! │  core      - AppError, service traits                  │
//! │  debug     - tracing initialisation                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON, multipart)
//!          ▼
//! ┌─────────────────────────────┐
//! │  Catalog / Cart REST API    │
//! │  http://<host>:8080/api     │
//! └─────────────────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── app::Storefront
//!       ├── app::orchestrator ──┐
//!       ├── app::catalog_admin ─┼── core::CatalogService ── services::api::ApiClient
//!       └── app::cart_store ────┴── core::CartService ──────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Service Traits
//!
//! Stores never talk to `reqwest` directly. They hold an
//! `Arc<dyn CatalogService>` / `Arc<dyn CartService>`; the HTTP client
//! implements both, and tests substitute in-memory fakes.
//!
//! ### State Management
//!
//! Store state lives behind `parking_lot::RwLock`:
//! - **Locked briefly**: one read or one commit at a time
//! - **Never across `.await`**: drop the guard, await, re-acquire to commit
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront::app::Storefront;
//! use storefront::config::StorefrontConfig;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> storefront::Result<()> {
//! let config = StorefrontConfig::default();
//! let store = Storefront::new(&config);
//! let cancel = CancellationToken::new();
//!
//! store.menus.open(&cancel).await?;
//! store.cart.load(&cancel).await?;
//! println!("{:?}", store.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p storefront
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{Storefront, SummaryPolicy, OrderSummary};
pub use core::{AppError, Result};
