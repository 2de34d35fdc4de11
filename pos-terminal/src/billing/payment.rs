//! Simulated payment processing
//!
//! No gateway is contacted. Cash and card settle after a short fixed delay,
//! QR after a longer one. Closing the dialog cancels the wait through a
//! [`CancellationToken`].

use super::checkout::{CheckoutError, CheckoutSession, ConfirmedPayment};
use crate::core::Config;
use shared::PaymentMethod;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// QR image service; the payload goes in `data`
const QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("Payment cancelled")]
    Cancelled,
}

/// Transaction string encoded in the QR code
pub fn qr_payload(timestamp_ms: i64, total: i64) -> String {
    format!("LKR_POS_TXN_{}_{}", timestamp_ms, total)
}

/// Image URL showing `payload` as a QR code (never fetched here)
pub fn qr_image_url(payload: &str) -> String {
    format!("{}{}", QR_IMAGE_ENDPOINT, payload)
}

#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    card_delay: Duration,
    qr_delay: Duration,
}

impl PaymentProcessor {
    pub fn new(card_delay: Duration, qr_delay: Duration) -> Self {
        Self {
            card_delay,
            qr_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.card_delay_ms),
            Duration::from_millis(config.qr_delay_ms),
        )
    }

    /// How long `method` takes to "settle"
    pub fn delay_for(&self, method: PaymentMethod) -> Duration {
        match method {
            PaymentMethod::Cash | PaymentMethod::Card => self.card_delay,
            PaymentMethod::Qr => self.qr_delay,
        }
    }

    /// Wait out the processing delay and confirm the session
    ///
    /// The session is checked before waiting, so an unconfirmable cash
    /// payment fails immediately.
    #[instrument(skip_all, fields(method = %session.payment_method(), total = session.totals().total))]
    pub async fn process(
        &self,
        session: &CheckoutSession,
        cancel: &CancellationToken,
    ) -> Result<ConfirmedPayment, PaymentError> {
        if let Err(e) = session.confirm() {
            warn!(error = %e, "Payment not confirmable");
            return Err(e.into());
        }

        let delay = self.delay_for(session.payment_method());
        tokio::select! {
            _ = cancel.cancelled() => {
                warn!("Payment cancelled");
                Err(PaymentError::Cancelled)
            }
            _ = tokio::time::sleep(delay) => {
                let payment = session.confirm()?;
                info!(change = payment.change, "Payment settled");
                Ok(payment)
            }
        }
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(3000))
    }
}
