//! Reporting windows in the caller's time zone

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use shared::Order;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar window around "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Same local day
    #[default]
    Daily,
    /// Same local month
    Monthly,
    /// Same local year
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time range: {0} (expected daily, monthly or yearly)")]
pub struct UnknownTimeRange(pub String);

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Daily => "daily",
            TimeRange::Monthly => "monthly",
            TimeRange::Yearly => "yearly",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "today" => Ok(TimeRange::Daily),
            "monthly" | "month" => Ok(TimeRange::Monthly),
            "yearly" | "year" => Ok(TimeRange::Yearly),
            _ => Err(UnknownTimeRange(s.to_string())),
        }
    }
}

/// Order instant in the zone of `now`
pub(crate) fn local_time<Tz: TimeZone>(order: &Order, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    now.timezone().timestamp_millis_opt(order.timestamp).single()
}

/// Whether `at` falls in the same `range` window as `now`
pub(crate) fn in_range<Tz: TimeZone>(at: &DateTime<Tz>, range: TimeRange, now: &DateTime<Tz>) -> bool {
    match range {
        TimeRange::Daily => at.date_naive() == now.date_naive(),
        TimeRange::Monthly => at.year() == now.year() && at.month() == now.month(),
        TimeRange::Yearly => at.year() == now.year(),
    }
}

/// Orders whose timestamp falls in the same local day/month/year as `now`
pub fn filter_by_range<'a, Tz: TimeZone>(
    orders: &'a [Order],
    range: TimeRange,
    now: &DateTime<Tz>,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| local_time(o, now).is_some_and(|at| in_range(&at, range, now)))
        .collect()
}

/// Number of days in the month containing `date`
pub(crate) fn days_in_month(date: NaiveDate) -> u32 {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::store::tests::create_test_order;
    use chrono::Utc;
    use chrono_tz::Asia::Colombo;

    fn at(tz: chrono_tz::Tz, y: i32, m: u32, d: u32, h: u32) -> DateTime<chrono_tz::Tz> {
        tz.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_range() {
        assert_eq!("Daily".parse::<TimeRange>().unwrap(), TimeRange::Daily);
        assert_eq!("month".parse::<TimeRange>().unwrap(), TimeRange::Monthly);
        assert_eq!("yearly".parse::<TimeRange>().unwrap(), TimeRange::Yearly);
        assert!("weekly".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_daily_excludes_yesterday() {
        let now = at(Colombo, 2024, 3, 15, 14);
        let this_morning = at(Colombo, 2024, 3, 15, 8).timestamp_millis();
        let yesterday = at(Colombo, 2024, 3, 14, 23).timestamp_millis();
        let orders = vec![
            create_test_order("1", this_morning),
            create_test_order("2", yesterday),
        ];

        let today = filter_by_range(&orders, TimeRange::Daily, &now);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, "1");

        assert_eq!(filter_by_range(&orders, TimeRange::Monthly, &now).len(), 2);
    }

    #[test]
    fn test_day_boundary_follows_zone() {
        // 2024-03-14 20:00 UTC is 2024-03-15 01:30 in Colombo
        let instant = Utc.with_ymd_and_hms(2024, 3, 14, 20, 0, 0).unwrap();
        let orders = vec![create_test_order("1", instant.timestamp_millis())];

        let colombo_now = at(Colombo, 2024, 3, 15, 12);
        assert_eq!(filter_by_range(&orders, TimeRange::Daily, &colombo_now).len(), 1);

        let utc_now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert!(filter_by_range(&orders, TimeRange::Daily, &utc_now).is_empty());
    }

    #[test]
    fn test_yearly_window() {
        let now = at(Colombo, 2024, 1, 2, 9);
        let orders = vec![
            create_test_order("1", at(Colombo, 2024, 1, 1, 0).timestamp_millis()),
            create_test_order("2", at(Colombo, 2023, 12, 31, 23).timestamp_millis()),
        ];
        let year = filter_by_range(&orders, TimeRange::Yearly, &now);
        assert_eq!(year.len(), 1);
        assert_eq!(year[0].id, "1");
    }

    #[test]
    fn test_days_in_month() {
        let d = |y, m| NaiveDate::from_ymd_opt(y, m, 10).unwrap();
        assert_eq!(days_in_month(d(2024, 2)), 29);
        assert_eq!(days_in_month(d(2023, 2)), 28);
        assert_eq!(days_in_month(d(2024, 4)), 30);
        assert_eq!(days_in_month(d(2024, 12)), 31);
    }
}
