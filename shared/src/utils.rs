//! # Shared Utility Functions
//!
//! Helpers used by every consumer of the storefront DTOs.
//!
//! ## Price Formatting
//!
//! - [`format_price`] - Whole currency units with `id-ID` grouping (`25000` → `"25.000"`)
//!
//! ## Image Paths
//!
//! - [`storage_url`] - Join the storage base URL and a server-relative image path
//!
//! ## Lenient Decoding
//!
//! - [`deserialize_price`] - `serde` helper accepting `5000`, `5000.5` or `"5000.00"`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, storage_url};
//!
//! assert_eq!(format_price(32500.0), "32.500");
//! assert_eq!(
//!     storage_url("http://127.0.0.1:8080/storage", "menus/tea.jpg"),
//!     "http://127.0.0.1:8080/storage/menus/tea.jpg"
//! );
//! ```

use serde::{Deserialize, Deserializer};

/// Format an amount as whole currency units using `.` as the thousands separator.
///
/// The amount is rounded to the nearest unit first, so `1234.6` becomes `"1.235"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0.0), "0");
/// assert_eq!(format_price(5000.0), "5.000");
/// assert_eq!(format_price(1234567.0), "1.234.567");
/// assert_eq!(format_price(-2500.0), "-2.500");
/// ```
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Resolve a server-relative image path against the storage base URL.
///
/// Redundant slashes on either side of the join are dropped. An empty path
/// yields the base URL unchanged.
pub fn storage_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return base.to_string();
    }

    format!("{}/{}", base, path)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// Deserialize a price that may arrive as a JSON number or a numeric string.
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {:?}", text))),
    }
}
