//! Money calculation utilities using rust_decimal for precision
//!
//! Menu prices are whole currency units. Percent discounts are computed in
//! `Decimal` and rounded to a whole unit (half away from zero), so the
//! stored `discount` is always an integer.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shared::CartItem;

/// Discount percentages offered at the counter
pub const DISCOUNT_OPTIONS: [u8; 3] = [0, 5, 10];

/// Subtotal, discount and total of a set of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
}

/// Σ(price × quantity), saturating at `i64::MAX`
pub fn subtotal(items: &[CartItem]) -> i64 {
    items
        .iter()
        .map(CartItem::line_total)
        .fold(0i64, i64::saturating_add)
}

/// round(subtotal × percent / 100)
pub fn discount_amount(subtotal: i64, percent: u8) -> i64 {
    let amount = Decimal::from(subtotal) * Decimal::from(percent) / Decimal::ONE_HUNDRED;
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

pub fn compute_totals(items: &[CartItem], percent: u8) -> CartTotals {
    let subtotal = subtotal(items);
    let discount = discount_amount(subtotal, percent);
    CartTotals {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

pub fn is_valid_discount(percent: u8) -> bool {
    DISCOUNT_OPTIONS.contains(&percent)
}

/// Cash given minus total; negative when short
pub fn change_due(tendered: i64, total: i64) -> i64 {
    tendered.saturating_sub(total)
}
