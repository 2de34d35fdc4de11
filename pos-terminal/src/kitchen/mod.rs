//! 后厨看板
//!
//! 显示所有未完成订单 (按下单顺序)，超过阈值未完成的订单标记为超时。
//! 超时只是提示，不影响状态流转。

use serde::Serialize;
use shared::{Order, OrderStatus};

/// 默认超时阈值 (分钟)
pub const DEFAULT_LATE_AFTER_MINUTES: i64 = 15;

/// One order card on the board
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenTicket<'a> {
    pub order: &'a Order,
    pub elapsed_ms: i64,
    pub is_late: bool,
    /// Label of the button that advances this order
    pub action: Option<&'static str>,
}

impl KitchenTicket<'_> {
    /// Elapsed time as `m:ss`
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KitchenBoard {
    late_after_ms: i64,
}

impl KitchenBoard {
    pub fn new(late_after_minutes: i64) -> Self {
        Self {
            late_after_ms: late_after_minutes.max(0).saturating_mul(60_000),
        }
    }

    /// Whether `order` has been open longer than the threshold at `now_ms`
    pub fn is_late(&self, order: &Order, now_ms: i64) -> bool {
        order.status != OrderStatus::Completed
            && now_ms.saturating_sub(order.timestamp) > self.late_after_ms
    }

    /// Non-completed orders, oldest first
    pub fn tickets<'a>(&self, orders: &'a [Order], now_ms: i64) -> Vec<KitchenTicket<'a>> {
        orders
            .iter()
            .filter(|o| o.status != OrderStatus::Completed)
            .map(|order| KitchenTicket {
                order,
                elapsed_ms: now_ms.saturating_sub(order.timestamp).max(0),
                is_late: self.is_late(order, now_ms),
                action: action_label(order.status),
            })
            .collect()
    }
}

impl Default for KitchenBoard {
    fn default() -> Self {
        Self::new(DEFAULT_LATE_AFTER_MINUTES)
    }
}

/// Button label for the next step, `None` once completed
pub fn action_label(status: OrderStatus) -> Option<&'static str> {
    match status {
        OrderStatus::Pending => Some("Start Cooking"),
        OrderStatus::Kitchen => Some("Mark Ready"),
        OrderStatus::Ready => Some("Complete Order"),
        OrderStatus::Completed => None,
    }
}

/// `m:ss`, minutes unbounded
pub fn format_elapsed(elapsed_ms: i64) -> String {
    let secs = elapsed_ms.max(0) / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
