//! Shared types for orders

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Payment Method
// ============================================================================

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash, requires an amount tendered
    #[default]
    Cash,
    /// Card terminal (simulated)
    Card,
    /// QR payment (simulated)
    Qr,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Qr => "QR",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CASH" => Ok(PaymentMethod::Cash),
            "CARD" => Ok(PaymentMethod::Card),
            "QR" => Ok(PaymentMethod::Qr),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

// ============================================================================
// Cart Item
// ============================================================================

/// Cart line - a menu item snapshot with quantity and kitchen notes
///
/// Serialized flat (menu item fields next to `quantity`/`notes`), the same
/// shape orders store their items in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    /// Always >= 1 while the line exists
    pub quantity: u32,
    /// Free-text instructions for the kitchen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CartItem {
    /// New line with quantity 1
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            notes: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// price × quantity, saturating at `i64::MAX`
    pub fn line_total(&self) -> i64 {
        self.item.price.saturating_mul(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn dosa() -> MenuItem {
        MenuItem {
            id: "2".to_string(),
            name: "Ghee Dosa".to_string(),
            price: 599,
            category: Category::Dosa,
            description: None,
            image: None,
            is_vegetarian: Some(true),
            is_vegan: None,
            available: true,
        }
    }

    #[test]
    fn test_line_total() {
        let mut line = CartItem::new(dosa());
        assert_eq!(line.line_total(), 599);
        line.quantity = 3;
        assert_eq!(line.line_total(), 1797);

        let mut huge = CartItem::new(MenuItem {
            price: i64::MAX,
            ..dosa()
        });
        huge.quantity = 2;
        assert_eq!(huge.line_total(), i64::MAX);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let mut line = CartItem::new(dosa());
        line.notes = Some("extra crispy".to_string());
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["name"], "Ghee Dosa");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["notes"], "extra crispy");
        assert!(value.get("item").is_none());

        let back: CartItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!("QR".parse::<PaymentMethod>(), Ok(PaymentMethod::Qr));
        assert!("cheque".parse::<PaymentMethod>().is_err());
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "\"CARD\"");
    }
}
