use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::deserialize_price;

/// Category availability flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CategoryStatus {
    #[default]
    #[serde(alias = "active", alias = "ACTIVE")]
    Active,
    #[serde(alias = "inactive", alias = "INACTIVE")]
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "Active",
            CategoryStatus::Inactive => "Inactive",
        }
    }

    /// Parse a form value, ignoring case. Empty input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(CategoryStatus::Active),
            "inactive" => Some(CategoryStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category as returned by `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: CategoryStatus,
}

/// Category create request (`POST /categories`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub status: CategoryStatus,
}

/// Response of `POST /categories`.
///
/// The API answers with the stored category, but a rejected payload comes back
/// as a body without an `id`, so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedCategory {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<CategoryStatus>,
}

/// Category reference embedded in a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// Purchasable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: CategoryRef,
    /// Server-relative image path, served under `/storage/`
    #[serde(default)]
    pub image: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub status: String,
}
