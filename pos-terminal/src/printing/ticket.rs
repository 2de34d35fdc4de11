//! Kitchen ticket renderer
//!
//! Renders kitchen board tickets for the pass or a ticket printer.

use crate::kitchen::KitchenTicket;
use pos_printer::TextBuilder;

/// Kitchen ticket renderer
pub struct KitchenTicketRenderer {
    width: usize,
}

impl KitchenTicketRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render the whole board, one ticket after another
    pub fn render_board(&self, tickets: &[KitchenTicket<'_>]) -> String {
        let mut b = TextBuilder::new(self.width);
        if tickets.is_empty() {
            b.text_center("No active orders");
            return b.finalize();
        }
        for ticket in tickets {
            self.render_ticket(&mut b, ticket);
            b.newline();
        }
        b.finalize()
    }

    fn render_ticket(&self, b: &mut TextBuilder, ticket: &KitchenTicket<'_>) {
        let order = ticket.order;
        b.eq_sep();
        b.line_lr(
            &format!("Table {}", order.table_id),
            &format!("[{}]", order.status),
        );
        let elapsed = if ticket.is_late {
            format!("LATE {}", ticket.elapsed_label())
        } else {
            ticket.elapsed_label()
        };
        b.line_lr(&format!("Order #{}", order.id), &elapsed);
        b.dash_sep();

        for line in &order.items {
            b.write_line(&format!("{} x {}", line.quantity, line.name()));
            if let Some(notes) = &line.notes {
                b.write_line(&format!("    * {}", notes));
            }
        }

        if let Some(action) = ticket.action {
            b.dash_sep();
            b.text_right(&format!("> {}", action));
        }
    }
}

impl Default for KitchenTicketRenderer {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::KitchenBoard;
    use crate::orders::store::tests::create_test_order;
    use shared::{CartItem, Category, MenuItem, OrderStatus};

    fn order_with_items() -> shared::Order {
        let mut line = CartItem::new(MenuItem {
            id: "5".into(),
            name: "Spicy Idli Kottu".into(),
            price: 599,
            category: Category::Kottu,
            description: None,
            image: None,
            is_vegetarian: Some(true),
            is_vegan: None,
            available: true,
        });
        line.quantity = 2;
        line.notes = Some("less spicy".into());
        let mut o = create_test_order("100007", 0);
        o.items = vec![line];
        o
    }

    #[test]
    fn test_render_late_ticket() {
        let orders = vec![order_with_items()];
        let tickets = KitchenBoard::default().tickets(&orders, 16 * 60_000 + 5_000);
        let text = KitchenTicketRenderer::default().render_board(&tickets);

        assert!(text.contains("Table 3"));
        assert!(text.contains("[PENDING]"));
        assert!(text.contains("Order #100007"));
        assert!(text.contains("LATE 16:05"));
        assert!(text.contains("2 x Spicy Idli Kottu"));
        assert!(text.contains("    * less spicy"));
        assert!(text.contains("> Start Cooking"));
    }

    #[test]
    fn test_render_board() {
        let mut ready = order_with_items();
        ready.status = OrderStatus::Ready;
        let orders = vec![ready];
        let tickets = KitchenBoard::default().tickets(&orders, 60_000);
        let text = KitchenTicketRenderer::default().render_board(&tickets);
        assert!(text.contains("1:00"));
        assert!(!text.contains("LATE"));
        assert!(text.contains("> Complete Order"));

        let empty = KitchenTicketRenderer::default().render_board(&[]);
        assert!(empty.contains("No active orders"));
    }
}
