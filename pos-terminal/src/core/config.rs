use chrono_tz::Tz;
use std::path::PathBuf;

/// 终端配置 - 收银终端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./pos-data | 工作目录 (数据库、日志、小票) |
/// | DB_FILE | pos.redb | 数据库文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录，设置后按天滚动写文件 |
/// | TIMEZONE | - | 报表时区 (IANA)，未设置用本机时区 |
/// | RESTAURANT_NAME | Lanka Dosa House | 小票抬头 |
/// | CURRENCY | LKR | 货币符号 |
/// | TABLE_ID | 3 | 默认桌号 |
/// | RECEIPT_WIDTH | 42 | 小票列宽 |
/// | LATE_AFTER_MINUTES | 15 | 后厨超时阈值 (分钟) |
/// | CARD_DELAY_MS | 1500 | 现金/刷卡模拟处理时长 |
/// | QR_DELAY_MS | 3000 | 扫码模拟处理时长 |
/// | TOP_ITEMS | 5 | 热销榜长度 |
/// | PRINT_SPOOL | false | 小票写入 `WORK_DIR/receipts` 而不是终端 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/pos TIMEZONE=Asia/Colombo pos-terminal report --range daily
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: PathBuf,
    /// 数据库文件名 (相对 work_dir)
    pub db_file: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 报表时区，`None` 表示本机时区
    pub timezone: Option<Tz>,
    pub restaurant_name: String,
    pub currency: String,
    pub table_id: String,
    pub receipt_width: usize,
    pub late_after_minutes: i64,
    pub card_delay_ms: u64,
    pub qr_delay_ms: u64,
    pub top_items: usize,
    pub print_spool: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试中传入 HashMap)
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let timezone = get("TIMEZONE").and_then(|tz| match tz.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!("Invalid TIMEZONE '{}': {}, using local clock", tz, e);
                None
            }
        });

        Self {
            work_dir: get("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./pos-data")),
            db_file: get("DB_FILE").unwrap_or_else(|| "pos.redb".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR"),
            timezone,
            restaurant_name: get("RESTAURANT_NAME").unwrap_or_else(|| "Lanka Dosa House".into()),
            currency: get("CURRENCY").unwrap_or_else(|| "LKR".into()),
            table_id: get("TABLE_ID").unwrap_or_else(|| "3".into()),
            receipt_width: get("RECEIPT_WIDTH")
                .and_then(|v| v.parse().ok())
                .filter(|w| *w >= 24)
                .unwrap_or(42),
            late_after_minutes: get("LATE_AFTER_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            card_delay_ms: get("CARD_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
            qr_delay_ms: get("QR_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            top_items: get("TOP_ITEMS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            print_spool: get("PRINT_SPOOL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.work_dir = work_dir.into();
        config
    }

    /// 数据库完整路径
    pub fn db_path(&self) -> PathBuf {
        self.work_dir.join(&self.db_file)
    }

    /// 小票输出目录
    pub fn spool_dir(&self) -> PathBuf {
        self.work_dir.join("receipts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.work_dir, PathBuf::from("./pos-data"));
        assert_eq!(config.db_path(), PathBuf::from("./pos-data/pos.redb"));
        assert_eq!(config.restaurant_name, "Lanka Dosa House");
        assert_eq!(config.currency, "LKR");
        assert_eq!(config.table_id, "3");
        assert_eq!(config.receipt_width, 42);
        assert_eq!(config.late_after_minutes, 15);
        assert_eq!(config.card_delay_ms, 1500);
        assert_eq!(config.qr_delay_ms, 3000);
        assert_eq!(config.top_items, 5);
        assert!(config.timezone.is_none());
        assert!(!config.print_spool);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("WORK_DIR", "/tmp/pos"),
            ("TIMEZONE", "Asia/Colombo"),
            ("LATE_AFTER_MINUTES", "20"),
            ("PRINT_SPOOL", "true"),
        ]));
        assert_eq!(config.spool_dir(), PathBuf::from("/tmp/pos/receipts"));
        assert_eq!(config.timezone, Some(chrono_tz::Asia::Colombo));
        assert_eq!(config.late_after_minutes, 20);
        assert!(config.print_spool);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TIMEZONE", "Mars/Olympus"),
            ("RECEIPT_WIDTH", "8"),
            ("TOP_ITEMS", "many"),
        ]));
        assert!(config.timezone.is_none());
        assert_eq!(config.receipt_width, 42);
        assert_eq!(config.top_items, 5);
    }
}
