//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the storefront REST API.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Categories, menu items and the category create request
//! - [`cart`] - Cart entries and the add-to-cart request
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/carts
//! Content-Type: application/json
//!
//! {
//!   "name": "Tea",
//!   "category": "Drinks",
//!   "img": "menus/tea.jpg",
//!   "qty": 1,
//!   "price": 5000.0
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "id": 7,
//!   "name": "Tea",
//!   "category": "Drinks",
//!   "img": "menus/tea.jpg",
//!   "qty": 1,
//!   "price": "5000.00"
//! }
//! ```

pub mod cart;
pub mod catalog;

pub use cart::*;
pub use catalog::*;
