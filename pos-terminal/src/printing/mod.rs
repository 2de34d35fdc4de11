//! 打印 - 小票与后厨单渲染
//!
//! 渲染成纯文本后交给 `pos-printer` (终端输出或 spool 目录)。

mod receipt;
mod ticket;

pub use receipt::ReceiptRenderer;
pub use ticket::KitchenTicketRenderer;

use crate::core::{Config, PosResult};
use pos_printer::{HostPrinter, PrintJob, Printer};
use shared::Order;
use tracing::{info, warn};

/// 按配置选择打印机
pub fn host_printer(config: &Config) -> PosResult<HostPrinter> {
    let spool = config.print_spool.then(|| config.spool_dir());
    Ok(HostPrinter::from_spool_dir(spool.as_deref())?)
}

/// 渲染并打印小票
pub async fn print_receipt<P: Printer>(printer: &P, config: &Config, order: &Order) -> PosResult<()> {
    let renderer = ReceiptRenderer::new(
        config.receipt_width,
        config.timezone,
        config.restaurant_name.clone(),
        config.currency.clone(),
    );
    let job = PrintJob::new(format!("receipt-{}", order.id), renderer.render(order));

    if !printer.is_online().await {
        warn!(order_id = %order.id, "Printer offline, receipt not printed");
        return Err(pos_printer::PrintError::Offline(format!("receipt {}", order.id)).into());
    }
    printer.print(&job).await?;
    info!(order_id = %order.id, "Receipt printed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::store::tests::create_test_order;

    #[tokio::test]
    async fn test_print_receipt_to_spool() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::with_work_dir(tmp.path());
        config.print_spool = true;

        let printer = host_printer(&config).unwrap();
        let order = create_test_order("100001", 0);
        print_receipt(&printer, &config, &order).await.unwrap();

        let text = std::fs::read_to_string(tmp.path().join("receipts/receipt-100001.txt")).unwrap();
        assert!(text.contains("Order #: 100001"));
    }
}
