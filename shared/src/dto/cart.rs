use serde::{Deserialize, Serialize};

use super::catalog::MenuItem;
use crate::utils::deserialize_price;

/// Line item in the remote cart (`GET /carts`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub id: i64,
    pub name: String,
    /// Category name, denormalized by the server
    #[serde(default)]
    pub category: String,
    /// Server-relative image path
    #[serde(default)]
    pub img: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub qty: u32,
}

impl CartEntry {
    /// `price * qty`
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Add-to-cart request (`POST /carts`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCartEntry {
    pub name: String,
    pub category: String,
    pub img: String,
    pub qty: u32,
    pub price: f64,
}

impl From<&MenuItem> for NewCartEntry {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.name.clone(),
            img: item.image.clone(),
            qty: 1,
            price: item.price,
        }
    }
}
