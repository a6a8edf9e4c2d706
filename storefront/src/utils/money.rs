//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` (the persisted JSON carries plain numbers);
//! sums are computed in `Decimal` and rounded back to 2 decimal places.

use rust_decimal::prelude::*;
use shared::models::CartItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// price × quantity
pub fn line_total(item: &CartItem) -> Decimal {
    to_decimal(item.price()) * Decimal::from(item.quantity)
}

/// Σ price × quantity over all lines
pub fn lines_total(items: &[CartItem]) -> f64 {
    to_f64(items.iter().map(line_total).sum())
}

/// Σ quantity over all lines
pub fn lines_count(items: &[CartItem]) -> i64 {
    items.iter().map(|i| i.quantity as i64).sum()
}

/// Fixed two-decimal rendering used on receipts (`8299.00`)
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", to_f64(to_decimal(value)))
}

/// Validate that a price is finite and non-negative
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
