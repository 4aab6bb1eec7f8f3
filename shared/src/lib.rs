//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the remote
//! catalog/cart REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::catalog`]**: Categories and menu items
//!   - **[`dto::cart`]**: Cart entries and add-to-cart requests
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_price`]**: Format an amount with `id-ID` digit grouping
//!   - **[`utils::storage_url`]**: Resolve a server-relative image path
//!   - **[`utils::deserialize_price`]**: Accept prices sent as numbers or numeric strings
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides (default `serde` behavior)
//! - Prices are decoded leniently: the API sends decimals as strings (`"5000.00"`)
//!   for some resources and as numbers for others
//! - Category status serializes as `"Active"` / `"Inactive"`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::catalog::MenuItem;
//! use shared::utils::format_price;
//!
//! let item: MenuItem = serde_json::from_str(r#"{
//!     "id": 10, "name": "Tea", "description": "Hot tea",
//!     "category": {"id": 1, "name": "Drinks"},
//!     "image": "menus/tea.jpg", "price": "5000.00", "stock": 12, "status": "active"
//! }"#).unwrap();
//!
//! assert_eq!(format_price(item.price), "5.000");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
