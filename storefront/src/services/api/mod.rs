//! # Storefront API Client Module
//!
//! HTTP client for the remote storefront REST API (`http://<host>:8080/api`).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, JSON decoding, service trait impls
//! ├── catalog.rs  - Categories and menu listings (+ local menu search)
//! ├── menu.rs     - Multipart menu creation with image upload
//! └── cart.rs     - Remote cart list/add/remove
//! ```
//!
//! No authentication headers are attached to any request.

pub mod cart;
pub mod catalog;
pub mod client;
pub mod menu;

pub use catalog::search_menus;
pub use client::ApiClient;
pub use menu::NewMenu;
