//! 订单 - 存储与状态流转

pub mod lifecycle;
pub mod store;

pub use lifecycle::LifecycleError;
pub use store::{FIRST_ORDER_NUMBER, OrderStore, StoreError};
