//! Order Module
//!
//! Types for placed orders:
//! - Cart lines: menu item snapshots with quantity and kitchen notes
//! - Orders: finalized, persisted transactions
//! - Status: the PENDING → KITCHEN → READY → COMPLETED lifecycle

pub mod snapshot;
pub mod status;
pub mod types;

// Re-exports
pub use snapshot::Order;
pub use status::{OrderStatus, TransitionError};
pub use types::*;
