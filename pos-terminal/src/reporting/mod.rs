//! 报表 - 按时间范围汇总订单
//!
//! 所有函数都是纯函数：输入订单列表和"当前时间"(带时区)，
//! 不读取系统时钟，方便测试。所有状态的订单都计入统计。

mod metrics;
mod range;
mod trend;

pub use metrics::{SalesMetrics, TopItem, aggregate_metrics, aggregate_top_items};
pub use range::{TimeRange, UnknownTimeRange, filter_by_range};
pub use trend::{TrendPoint, build_trend};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use shared::Order;

/// 最近订单条数
pub const RECENT_ORDERS: usize = 5;

/// 仪表盘数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub range: TimeRange,
    pub metrics: SalesMetrics,
    pub top_items: Vec<TopItem>,
    pub trend: Vec<TrendPoint>,
    /// 范围内最新的订单，新→旧
    pub recent_orders: Vec<Order>,
}

/// 生成仪表盘报表
pub fn dashboard_report<Tz: TimeZone>(
    orders: &[Order],
    range: TimeRange,
    now: &DateTime<Tz>,
    top_n: usize,
) -> DashboardReport {
    let in_range = filter_by_range(orders, range, now);
    let mut recent: Vec<Order> = in_range.iter().map(|o| (*o).clone()).collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(RECENT_ORDERS);

    DashboardReport {
        range,
        metrics: aggregate_metrics(in_range.iter().copied()),
        top_items: aggregate_top_items(in_range.iter().copied(), top_n),
        trend: build_trend(orders, range, now),
        recent_orders: recent,
    }
}
