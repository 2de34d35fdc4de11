//! Order store - append-only list of placed orders
//!
//! Orders are never removed. Only their status changes, through
//! [`lifecycle`](super::lifecycle). Each mutation swaps in a new immutable
//! snapshot.

use shared::Order;
use std::sync::Arc;
use thiserror::Error;

/// First order number handed out by an empty store
pub const FIRST_ORDER_NUMBER: u64 = 100_001;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Arc<[Order]>,
    /// Last issued order number
    last_seq: u64,
}

impl OrderStore {
    /// Rebuild from persisted state
    ///
    /// The counter never goes below the highest numeric id already stored, so
    /// ids stay unique even if the persisted counter was lost.
    pub fn new(orders: Vec<Order>, last_seq: u64) -> Self {
        let max_id = orders
            .iter()
            .filter_map(|o| o.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            orders: orders.into(),
            last_seq: last_seq.max(max_id),
        }
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn snapshot(&self) -> Arc<[Order]> {
        Arc::clone(&self.orders)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Issue the next order id
    pub fn next_id(&mut self) -> String {
        self.last_seq = (self.last_seq + 1).max(FIRST_ORDER_NUMBER);
        self.last_seq.to_string()
    }

    pub fn append(&mut self, order: Order) -> Result<Arc<[Order]>, StoreError> {
        if self.get(&order.id).is_some() {
            return Err(StoreError::DuplicateOrderId(order.id));
        }
        if let Ok(n) = order.id.parse::<u64>() {
            self.last_seq = self.last_seq.max(n);
        }
        let mut orders = Vec::with_capacity(self.orders.len() + 1);
        orders.extend(self.orders.iter().cloned());
        orders.push(order);
        self.orders = orders.into();
        Ok(self.snapshot())
    }

    /// Replace one order via `f`, returning the updated copy
    pub(crate) fn modify<E>(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Order) -> Result<(), E>,
    ) -> Result<Order, E>
    where
        E: From<StoreError>,
    {
        let mut orders = self.orders.to_vec();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))?;
        f(order)?;
        let updated = order.clone();
        self.orders = orders.into();
        Ok(updated)
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
