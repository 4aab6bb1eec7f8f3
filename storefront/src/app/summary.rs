//! # Order Summary
//!
//! Pure pricing breakdown derived from a cart snapshot. Nothing here is cached;
//! call [`summarize`] whenever the cart changes.
//!
//! ```text
//! subtotal = Σ price × qty
//! tax      = round(subtotal × tax_rate)
//! total    = round(subtotal × (1 + tax_rate)) + fee
//! ```

use shared::CartEntry;

/// Pricing rules applied on top of the cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryPolicy {
    pub tax_rate: f64,
    /// Flat service fee in currency units
    pub fee: f64,
    /// Charge the fee even when the cart is empty
    pub fee_on_empty_cart: bool,
}

impl SummaryPolicy {
    pub const DEFAULT_TAX_RATE: f64 = 0.1;
    pub const DEFAULT_FEE: f64 = 5000.0;
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Self::DEFAULT_TAX_RATE,
            fee: Self::DEFAULT_FEE,
            fee_on_empty_cart: true,
        }
    }
}

/// Derived pricing breakdown, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub fee: f64,
    pub total: f64,
}

/// Compute the order summary for `entries` under `policy`.
pub fn summarize(entries: &[CartEntry], policy: &SummaryPolicy) -> OrderSummary {
    let subtotal: f64 = entries.iter().map(CartEntry::line_total).sum();

    let fee = if entries.is_empty() && !policy.fee_on_empty_cart {
        0.0
    } else {
        policy.fee
    };

    OrderSummary {
        subtotal,
        tax: (subtotal * policy.tax_rate).round(),
        fee,
        total: (subtotal * (1.0 + policy.tax_rate)).round() + fee,
    }
}
