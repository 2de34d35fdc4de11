//! Data models
//!
//! Menu catalog entries and the logged-in user. Field names serialize in
//! camelCase so the persisted JSON keeps the layout the front end reads.

pub mod category;
pub mod menu;
pub mod role;
pub mod user;

// Re-exports
pub use category::*;
pub use menu::*;
pub use role::*;
pub use user::*;
