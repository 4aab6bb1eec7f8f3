//! # Services Module
//!
//! External service integrations for the storefront client.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │   app (CartStore, CategoryMenuOrchestrator)   │
//! │                      │                        │
//! │        dyn CatalogService / CartService       │
//! │                      │                        │
//! │              ApiClient (api/)                 │
//! └──────────────────────┼────────────────────────┘
//!                        │ HTTP/JSON, multipart
//!                        ▼
//!            ┌──────────────────────────┐
//!            │  Storefront REST API     │
//!            │  /categories  /menus     │
//!            │  /carts       /storage   │
//!            └──────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Endpoint functions return [`crate::core::Result`]:
//! - transport failures → `AppError::Network`
//! - unexpected bodies → `AppError::Decode`
//! - unexpected status codes → `AppError::OperationFailed`
//! - rejected category payloads (no id) → `AppError::Validation`

pub mod api;
