//! Unified error codes for the POS terminal
//!
//! - [`ErrorCode`]: numeric code for every failure the terminal reports
//! - [`AppError`]: code plus human-readable message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::OrderNotFound, "Order not found: 100001");
//! assert_eq!(err.code.code(), 4001);
//! assert_eq!(err.to_string(), "Order not found: 100001");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
