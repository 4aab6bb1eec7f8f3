//! # Logging Infrastructure
//!
//! File-based structured logging for the storefront client.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/storefront.log` with daily rotation
//! - **Optional stderr mirror**: for running the headless binary interactively
//! - **Panic logging**: panics are recorded with location and message
//!
//! ## Usage
//!
//! ```rust,no_run
//! let _guard = storefront::debug::init();
//!
//! tracing::info!(
//!     endpoint = "/categories",
//!     duration_ms = 42,
//!     "API call completed"
//! );
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `storefront=info,warn`)
//! - `STOREFRONT_LOG_DIR`: Log directory (default `logs`)
//! - `STOREFRONT_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, init_with};
