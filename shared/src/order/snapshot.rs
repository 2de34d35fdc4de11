//! Order - a finalized transaction with a lifecycle status
//!
//! Items, totals and the timestamp are frozen at checkout. Only `status`
//! changes afterwards, and only through [`OrderStatus::transition`].

use super::status::OrderStatus;
use super::types::{CartItem, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Numeric string issued by the store's counter
    pub id: String,
    pub table_id: String,
    /// Cart lines snapshotted at checkout
    pub items: Vec<CartItem>,
    pub subtotal: i64,
    /// Absolute discount amount
    pub discount: i64,
    pub total: i64,
    pub status: OrderStatus,
    /// Creation instant (Unix millis)
    pub timestamp: i64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub cashier_name: String,
    /// Cash only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_tendered: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<i64>,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Σ quantity over all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
