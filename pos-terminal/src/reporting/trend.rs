//! Revenue trend buckets
//!
//! | Range | Buckets | Label |
//! |-------|---------|-------|
//! | daily | 24 (per hour) | `00:00` … `23:00` |
//! | monthly | days in month | `1` … `31` |
//! | yearly | 12 (per month) | `Jan` … `Dec` |
//!
//! Every bucket exists even when nothing was sold in it.

use super::range::{TimeRange, days_in_month, in_range, local_time};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::Serialize;
use shared::Order;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub revenue: i64,
    pub orders: usize,
}

pub fn build_trend<Tz: TimeZone>(orders: &[Order], range: TimeRange, now: &DateTime<Tz>) -> Vec<TrendPoint> {
    let labels: Vec<String> = match range {
        TimeRange::Daily => (0..24).map(|h| format!("{:02}:00", h)).collect(),
        TimeRange::Monthly => (1..=days_in_month(now.date_naive()))
            .map(|d| d.to_string())
            .collect(),
        TimeRange::Yearly => MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
    };
    let mut points: Vec<TrendPoint> = labels
        .into_iter()
        .map(|label| TrendPoint {
            label,
            revenue: 0,
            orders: 0,
        })
        .collect();

    for order in orders {
        let Some(at) = local_time(order, now) else {
            continue;
        };
        if !in_range(&at, range, now) {
            continue;
        }
        let bucket = match range {
            TimeRange::Daily => at.hour() as usize,
            TimeRange::Monthly => at.day0() as usize,
            TimeRange::Yearly => at.month0() as usize,
        };
        if let Some(point) = points.get_mut(bucket) {
            point.revenue += order.total;
            point.orders += 1;
        }
    }
    points
}
