//! Customer receipt renderer
//!
//! Renders a placed [`Order`] into fixed-width text.

use crate::utils::time::{receipt_date, receipt_time};
use chrono_tz::Tz;
use pos_printer::{TextBuilder, pad, truncate};
use shared::util::format_amount;
use shared::{Order, PaymentMethod};

/// Qty column width
const QTY_COL: usize = 5;
/// Price column width
const PRICE_COL: usize = 10;

pub struct ReceiptRenderer {
    width: usize,
    timezone: Option<Tz>,
    restaurant_name: String,
    currency: String,
}

impl ReceiptRenderer {
    /// `timezone` of `None` prints in the machine's local time
    pub fn new(
        width: usize,
        timezone: Option<Tz>,
        restaurant_name: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            width,
            timezone,
            restaurant_name: restaurant_name.into(),
            currency: currency.into(),
        }
    }

    pub fn render(&self, order: &Order) -> String {
        let mut b = TextBuilder::new(self.width);

        self.render_header(&mut b, order);
        self.render_items(&mut b, order);
        self.render_totals(&mut b, order);
        self.render_payment(&mut b, order);

        b.eq_sep();
        b.text_center("THANK YOU FOR VISITING!");
        b.text_center("Please come again.");
        b.finalize()
    }

    fn render_header(&self, b: &mut TextBuilder, order: &Order) {
        b.text_center(&self.restaurant_name.to_uppercase());
        b.eq_sep();
        b.line_lr(
            &format!("Date: {}", receipt_date(order.timestamp, self.timezone)),
            &receipt_time(order.timestamp, self.timezone),
        );
        b.line_lr(
            &format!("Order #: {}", order.id),
            &format!("Table: {}", order.table_id),
        );
        b.line_lr("Cashier:", &order.cashier_name);
        b.dash_sep();
    }

    fn name_col(&self) -> usize {
        self.width.saturating_sub(QTY_COL + PRICE_COL).max(1)
    }

    fn render_items(&self, b: &mut TextBuilder, order: &Order) {
        let name_col = self.name_col();
        b.write_line(&format!(
            "{}{}{}",
            pad("Item", name_col, false),
            pad("Qty", QTY_COL, true),
            pad("Price", PRICE_COL, true)
        ));
        for line in &order.items {
            b.write_line(&format!(
                "{}{}{}",
                pad(&truncate(line.name(), name_col - 1), name_col, false),
                pad(&line.quantity.to_string(), QTY_COL, true),
                pad(&format_amount(line.line_total()), PRICE_COL, true)
            ));
            if let Some(notes) = &line.notes {
                b.write_line(&format!("  * {}", notes));
            }
        }
        b.dash_sep();
    }

    fn render_totals(&self, b: &mut TextBuilder, order: &Order) {
        b.pair("Subtotal", &format_amount(order.subtotal));
        if order.discount > 0 {
            b.pair("Discount", &format!("- {}", format_amount(order.discount)));
        }
        b.pair(
            "Total",
            &format!("{} {}", self.currency, format_amount(order.total)),
        );
        b.dash_sep();
    }

    fn render_payment(&self, b: &mut TextBuilder, order: &Order) {
        b.write_line(&format!("Payment: {}", order.payment_method));
        if order.payment_method == PaymentMethod::Cash {
            if let Some(tendered) = order.amount_tendered {
                b.pair("Cash Given:", &format_amount(tendered));
            }
            if let Some(change) = order.change {
                b.pair("Change:", &format_amount(change));
            }
        }
    }
}
