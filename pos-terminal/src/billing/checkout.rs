//! Checkout session - frozen cart totals plus the chosen payment details

use super::money::{self, CartTotals};
use crate::cart::Cart;
use shared::{CartItem, PaymentMethod};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient cash: tendered {tendered:?}, total {total}")]
    InsufficientCash { tendered: Option<i64>, total: i64 },
}

/// Open payment dialog
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    lines: Vec<CartItem>,
    discount_percent: u8,
    totals: CartTotals,
    method: PaymentMethod,
    amount_tendered: Option<i64>,
}

/// Payment the cashier confirmed, ready to become an order
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedPayment {
    pub lines: Vec<CartItem>,
    pub discount_percent: u8,
    pub method: PaymentMethod,
    /// Cash only
    pub amount_tendered: Option<i64>,
    /// tendered − total for cash, 0 otherwise
    pub change: i64,
}

/// Freeze the cart into a checkout session
pub fn initiate_checkout(cart: &Cart) -> Result<CheckoutSession, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(CheckoutSession {
        lines: cart.lines().to_vec(),
        discount_percent: cart.discount_percent(),
        totals: cart.totals(),
        method: PaymentMethod::default(),
        amount_tendered: None,
    })
}

impl CheckoutSession {
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn amount_tendered(&self) -> Option<i64> {
        self.amount_tendered
    }

    pub fn set_amount_tendered(&mut self, amount: Option<i64>) {
        self.amount_tendered = amount;
    }

    /// Change to hand back, shown while the cashier types the cash amount
    pub fn change_preview(&self) -> Option<i64> {
        self.amount_tendered
            .map(|t| money::change_due(t, self.totals.total))
    }

    /// Cash needs at least the total; card and QR always pass
    pub fn can_confirm(&self) -> bool {
        match self.method {
            PaymentMethod::Cash => self
                .amount_tendered
                .is_some_and(|t| t >= self.totals.total),
            PaymentMethod::Card | PaymentMethod::Qr => true,
        }
    }

    pub fn confirm(&self) -> Result<ConfirmedPayment, CheckoutError> {
        if !self.can_confirm() {
            return Err(CheckoutError::InsufficientCash {
                tendered: self.amount_tendered,
                total: self.totals.total,
            });
        }
        let (amount_tendered, change) = match self.method {
            PaymentMethod::Cash => {
                let tendered = self.amount_tendered.unwrap_or(self.totals.total);
                (Some(tendered), money::change_due(tendered, self.totals.total))
            }
            PaymentMethod::Card | PaymentMethod::Qr => (None, 0),
        };
        Ok(ConfirmedPayment {
            lines: self.lines.clone(),
            discount_percent: self.discount_percent,
            method: self.method,
            amount_tendered,
            change,
        })
    }
}
