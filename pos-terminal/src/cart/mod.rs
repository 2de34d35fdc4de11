//! 购物车 - 收银会话中的临时选择
//!
//! 不持久化。结账成功或手动清空后回到空车、0% 折扣。

use crate::billing::money::{self, is_valid_discount};
use shared::{CartItem, MenuItem};
use thiserror::Error;
use tracing::{debug, warn};

pub use crate::billing::money::CartTotals;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Discount must be one of 0, 5 or 10 percent, got {0}")]
    InvalidDiscount(u8),
}

/// Cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartItem>,
    discount_percent: u8,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Add one of `item`
    ///
    /// Unavailable items are ignored (returns `false`). An existing line for
    /// the same id is incremented, otherwise a new line with quantity 1 is
    /// appended.
    pub fn add_item(&mut self, item: &MenuItem) -> bool {
        if !item.available {
            debug!(item_id = %item.id, "Ignoring unavailable item");
            return false;
        }
        match self.lines.iter_mut().find(|l| l.id() == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartItem::new(item.clone())),
        }
        true
    }

    /// Change a line's quantity by `delta`, clamped at zero
    ///
    /// A line reaching zero is removed. Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &str, delta: i32) {
        let Some(pos) = self.lines.iter().position(|l| l.id() == item_id) else {
            return;
        };
        let next = (i64::from(self.lines[pos].quantity) + i64::from(delta)).max(0);
        if next == 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.id() != item_id);
    }

    /// Attach kitchen notes to a line; blank text clears them
    pub fn set_note(&mut self, item_id: &str, text: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == item_id) {
            let text = text.trim();
            line.notes = (!text.is_empty()).then(|| text.to_string());
        }
    }

    /// Empty the cart and reset the discount
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_percent = 0;
    }

    pub fn set_discount_percent(&mut self, percent: u8) -> Result<(), CartError> {
        if !is_valid_discount(percent) {
            warn!(percent, "Rejected discount");
            return Err(CartError::InvalidDiscount(percent));
        }
        self.discount_percent = percent;
        Ok(())
    }

    pub fn totals(&self) -> CartTotals {
        money::compute_totals(&self.lines, self.discount_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn menu_item(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price,
            category: Category::Dosa,
            description: None,
            image: None,
            is_vegetarian: None,
            is_vegan: None,
            available: true,
        }
    }

    #[test]
    fn test_add_item_merges_lines() {
        let mut cart = Cart::new();
        let a = menu_item("a", 500);
        assert!(cart.add_item(&a));
        assert!(cart.add_item(&a));
        cart.add_item(&menu_item("b", 300));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_unavailable_item_is_ignored() {
        let mut cart = Cart::new();
        let mut item = menu_item("a", 500);
        item.available = false;
        assert!(!cart.add_item(&item));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_and_removes() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 500));
        cart.update_quantity("a", 3);
        assert_eq!(cart.lines()[0].quantity, 4);

        cart.update_quantity("a", -10);
        assert!(cart.is_empty());

        // unknown id
        cart.update_quantity("zzz", 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_notes() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 500));
        cart.add_item(&menu_item("b", 300));

        cart.set_note("a", " no onion ");
        assert_eq!(cart.lines()[0].notes.as_deref(), Some("no onion"));
        cart.set_note("a", "   ");
        assert_eq!(cart.lines()[0].notes, None);

        cart.remove_item("a");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id(), "b");
    }

    #[test]
    fn test_totals_with_discount() {
        let mut cart = Cart::new();
        let a = menu_item("a", 500);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&menu_item("b", 300));
        cart.set_discount_percent(10).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.subtotal, 1300);
        assert_eq!(totals.discount, 130);
        assert_eq!(totals.total, 1170);
    }

    #[test]
    fn test_invalid_discount_rejected() {
        let mut cart = Cart::new();
        cart.set_discount_percent(5).unwrap();
        assert_eq!(cart.set_discount_percent(7), Err(CartError::InvalidDiscount(7)));
        assert_eq!(cart.discount_percent(), 5);
    }

    #[test]
    fn test_clear_resets_discount() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 500));
        cart.set_discount_percent(10).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.discount_percent(), 0);
        assert_eq!(cart.totals(), CartTotals::default());
    }
}
