//! 核心模块 - 配置、状态和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 终端配置
//! - [`PosState`] - 状态容器
//! - [`PosError`] - 终端错误

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{PosError, PosResult};
pub use state::PosState;
