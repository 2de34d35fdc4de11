//! 结账 - 金额计算、模拟支付
//!
//! 流程：`initiate_checkout(cart)` → 选择支付方式/输入现金 →
//! `PaymentProcessor::process` → `PosState::complete_checkout` 生成订单。

mod checkout;
pub mod money;
mod payment;

pub use checkout::{CheckoutError, CheckoutSession, ConfirmedPayment, initiate_checkout};
pub use money::CartTotals;
pub use payment::{PaymentError, PaymentProcessor, qr_image_url, qr_payload};
