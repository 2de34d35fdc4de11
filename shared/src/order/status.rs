//! Order lifecycle status
//!
//! ```text
//! PENDING ──▶ KITCHEN ──▶ READY ──▶ COMPLETED
//! ```
//!
//! [`OrderStatus::transition`] is the only place that decides whether a
//! status change is legal. Skips and reversals are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by the kitchen
    #[default]
    Pending,
    /// Cook has started
    Kitchen,
    /// Cooked, awaiting pickup/serve
    Ready,
    /// Served and closed (terminal)
    Completed,
}

/// Rejected status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("order is already completed")]
    AlreadyCompleted,

    #[error("cannot move order from {from} to {to}")]
    Illegal { from: OrderStatus, to: OrderStatus },
}

impl OrderStatus {
    /// The single legal successor, `None` for the terminal state
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Kitchen),
            OrderStatus::Kitchen => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Validate a transition to `to`, returning the new status
    pub fn transition(self, to: OrderStatus) -> Result<OrderStatus, TransitionError> {
        match self.next() {
            None => Err(TransitionError::AlreadyCompleted),
            Some(next) if next == to => Ok(next),
            Some(_) => Err(TransitionError::Illegal { from: self, to }),
        }
    }

    /// Move one step forward
    pub fn advance(self) -> Result<OrderStatus, TransitionError> {
        self.next().ok_or(TransitionError::AlreadyCompleted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Kitchen => "KITCHEN",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "KITCHEN" => Ok(OrderStatus::Kitchen),
            "READY" => Ok(OrderStatus::Ready),
            "COMPLETED" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}
