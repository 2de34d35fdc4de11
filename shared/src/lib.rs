//! Shared types for the POS terminal
//!
//! Domain models (menu, cart lines, orders, users), the order status
//! machine and the unified error codes used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use models::{Category, MenuItem, MenuItemCreate, MenuItemUpdate, User, UserRole, View};
pub use order::{CartItem, Order, OrderStatus, PaymentMethod};
