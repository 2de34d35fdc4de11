//! Order lifecycle
//!
//! ```text
//! PENDING ──▶ KITCHEN ──▶ READY ──▶ COMPLETED
//! ```
//!
//! Every status change goes through [`OrderStatus::transition`]. Items,
//! totals and the timestamp are never touched here.

use super::store::{OrderStore, StoreError};
use shared::order::TransitionError;
use shared::{Order, OrderStatus};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Invalid status transition for order {order_id}: {from} -> {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl From<StoreError> for LifecycleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OrderNotFound(id) | StoreError::DuplicateOrderId(id) => {
                LifecycleError::OrderNotFound(id)
            }
        }
    }
}

fn lifecycle_error(order_id: &str, from: OrderStatus, err: TransitionError) -> LifecycleError {
    match err {
        TransitionError::AlreadyCompleted => LifecycleError::AlreadyCompleted(order_id.to_string()),
        TransitionError::Illegal { to, .. } => LifecycleError::InvalidTransition {
            order_id: order_id.to_string(),
            from,
            to,
        },
    }
}

impl OrderStore {
    /// Move an order to `to`, which must be its immediate successor
    pub fn update_status(&mut self, order_id: &str, to: OrderStatus) -> Result<Order, LifecycleError> {
        let result = self.modify(order_id, |order: &mut Order| {
            let from = order.status;
            order.status = from
                .transition(to)
                .map_err(|e| lifecycle_error(order_id, from, e))?;
            Ok::<(), LifecycleError>(())
        });
        log_result(order_id, &result);
        result
    }

    /// Move an order one step forward
    pub fn advance(&mut self, order_id: &str) -> Result<Order, LifecycleError> {
        let result = self.modify(order_id, |order: &mut Order| {
            let from = order.status;
            order.status = from
                .advance()
                .map_err(|e| lifecycle_error(order_id, from, e))?;
            Ok::<(), LifecycleError>(())
        });
        log_result(order_id, &result);
        result
    }
}

fn log_result(order_id: &str, result: &Result<Order, LifecycleError>) {
    match result {
        Ok(order) => info!(order_id = %order_id, status = %order.status, "Order status updated"),
        Err(e) => warn!(order_id = %order_id, error = %e, "Order status change rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::store::tests::create_test_order;

    fn store_with(id: &str) -> OrderStore {
        let mut store = OrderStore::default();
        store.append(create_test_order(id, 1_000)).unwrap();
        store
    }

    #[test]
    fn test_advance_walks_full_lifecycle() {
        let mut store = store_with("100001");
        assert_eq!(store.advance("100001").unwrap().status, OrderStatus::Kitchen);
        assert_eq!(store.advance("100001").unwrap().status, OrderStatus::Ready);
        assert_eq!(store.advance("100001").unwrap().status, OrderStatus::Completed);
        assert_eq!(
            store.advance("100001").unwrap_err(),
            LifecycleError::AlreadyCompleted("100001".to_string())
        );
        assert_eq!(store.get("100001").unwrap().status, OrderStatus::Completed);
    }

    #[test]
    fn test_skip_and_reverse_rejected() {
        let mut store = store_with("100001");
        assert_eq!(
            store.update_status("100001", OrderStatus::Ready).unwrap_err(),
            LifecycleError::InvalidTransition {
                order_id: "100001".to_string(),
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            }
        );
        store.update_status("100001", OrderStatus::Kitchen).unwrap();
        assert!(matches!(
            store.update_status("100001", OrderStatus::Pending),
            Err(LifecycleError::InvalidTransition { .. })
        ));
        assert_eq!(store.get("100001").unwrap().status, OrderStatus::Kitchen);
    }

    #[test]
    fn test_unknown_order() {
        let mut store = OrderStore::default();
        assert_eq!(
            store.advance("42").unwrap_err(),
            LifecycleError::OrderNotFound("42".to_string())
        );
    }

    #[test]
    fn test_status_change_keeps_snapshot_fields() {
        let mut store = store_with("100001");
        let before = store.get("100001").unwrap().clone();
        let after = store.advance("100001").unwrap();
        assert_eq!(after.timestamp, before.timestamp);
        assert_eq!(after.items, before.items);
        assert_eq!(after.total, before.total);
    }
}
