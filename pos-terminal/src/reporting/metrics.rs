//! Sales metrics and best sellers

use serde::Serialize;
use shared::Order;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: i64,
    pub total_transactions: usize,
    pub total_discounts: i64,
    /// revenue / transactions, 0.0 when there are none
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: u64,
}

pub fn aggregate_metrics<'a>(orders: impl IntoIterator<Item = &'a Order>) -> SalesMetrics {
    let mut total_revenue = 0i64;
    let mut total_discounts = 0i64;
    let mut total_transactions = 0usize;
    for order in orders {
        total_revenue = total_revenue.saturating_add(order.total);
        total_discounts = total_discounts.saturating_add(order.discount);
        total_transactions += 1;
    }
    let average_order_value = if total_transactions == 0 {
        0.0
    } else {
        total_revenue as f64 / total_transactions as f64
    };
    SalesMetrics {
        total_revenue,
        total_transactions,
        total_discounts,
        average_order_value,
    }
}

/// Quantity sold per item name, best first, at most `n` entries
///
/// Ties keep the order in which names were first seen.
pub fn aggregate_top_items<'a>(orders: impl IntoIterator<Item = &'a Order>, n: usize) -> Vec<TopItem> {
    let mut totals: Vec<TopItem> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for line in orders.into_iter().flat_map(|o| o.items.iter()) {
        let name = line.name();
        match index.get(name) {
            Some(&i) => totals[i].quantity += u64::from(line.quantity),
            None => {
                index.insert(name, totals.len());
                totals.push(TopItem {
                    name: name.to_string(),
                    quantity: u64::from(line.quantity),
                });
            }
        }
    }

    // stable: equal quantities stay in first-seen order
    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(n);
    totals
}
