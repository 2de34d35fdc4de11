//! Lanka POS Terminal - 单机餐厅收银终端
//!
//! # 架构概述
//!
//! 一个进程持有全部状态，提交即持久化到本地 redb 文件：
//!
//! - **菜单** (`catalog`): 可售菜品与上架开关
//! - **购物车** (`cart`): 收银会话中的临时选择，不持久化
//! - **结账** (`billing`): 金额计算、模拟支付、生成订单
//! - **订单** (`orders`): 订单存储与状态流转
//! - **后厨看板** (`kitchen`): 未完成订单、超时标记
//! - **报表** (`reporting`): 时间范围过滤、指标、热销、趋势
//!
//! # 模块结构
//!
//! ```text
//! pos-terminal/src/
//! ├── core/          # 配置、状态容器、错误
//! ├── auth/          # 登录角色推断
//! ├── catalog/       # 菜单
//! ├── cart/          # 购物车
//! ├── billing/       # 结账与支付
//! ├── orders/        # 订单存储与生命周期
//! ├── kitchen/       # 后厨看板
//! ├── reporting/     # 报表聚合
//! ├── printing/      # 小票渲染
//! ├── storage.rs     # redb 持久化
//! ├── cli/           # 命令行前端
//! └── utils/         # 日志、时间
//! ```

pub mod auth;
pub mod billing;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod kitchen;
pub mod orders;
pub mod printing;
pub mod reporting;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use billing::{CheckoutSession, ConfirmedPayment, PaymentProcessor, initiate_checkout};
pub use cart::{Cart, CartTotals};
pub use catalog::MenuCatalog;
pub use core::{Config, PosError, PosResult, PosState};
pub use kitchen::KitchenBoard;
pub use orders::OrderStore;
pub use reporting::{DashboardReport, TimeRange};
pub use storage::{RedbStateStore, StateStore};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
