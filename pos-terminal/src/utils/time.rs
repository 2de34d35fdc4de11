//! 时间工具函数 - 业务时区转换
//!
//! 订单只保存 `i64` Unix millis；展示时按配置的时区 (或本机时区) 格式化。

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

/// Unix millis → 格式化字符串
///
/// `tz` 为 `None` 时使用本机时区。
pub fn format_millis(millis: i64, tz: Option<Tz>, fmt: &str) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        return String::new();
    };
    match tz {
        Some(tz) => utc.with_timezone(&tz).format(fmt).to_string(),
        None => utc.with_timezone(&Local).format(fmt).to_string(),
    }
}

/// 小票日期 (DD/MM/YYYY)
pub fn receipt_date(millis: i64, tz: Option<Tz>) -> String {
    format_millis(millis, tz, "%d/%m/%Y")
}

/// 小票时间 (HH:MM:SS)
pub fn receipt_time(millis: i64, tz: Option<Tz>) -> String {
    format_millis(millis, tz, "%H:%M:%S")
}

/// 当前时间 (业务时区)
pub fn now_in<T: TimeZone>(tz: &T) -> DateTime<T> {
    Utc::now().with_timezone(tz)
}
