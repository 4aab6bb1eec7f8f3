//! # Core Abstractions
//!
//! Error taxonomy and the service traits the stores are written against.
//!
//! ## Modules
//!
//! - **[`error`]**: [`AppError`] and the `Result<T>` alias
//! - **[`service`]**: [`CatalogService`] and [`CartService`]
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::core::service::{CartService, CatalogService};
//! use storefront::services::api::ApiClient;
//!
//! let api = Arc::new(ApiClient::with_base_url("http://127.0.0.1:8080/api"));
//! let catalog: Arc<dyn CatalogService> = api.clone();
//! let cart: Arc<dyn CartService> = api;
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{CartService, CatalogService};
