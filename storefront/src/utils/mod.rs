//! # Utilities
//!
//! - `validation`: client-side form checks run before any request

pub mod validation;
