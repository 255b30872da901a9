//! The legacy payment system, with its own call shape.

use std::cell::Cell;

use patternbook_domain::id::TransactionId;

/// What the legacy system hands back after a payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyConfirmation {
    pub transaction: TransactionId,
    pub amount: f64,
}

/// An old payment system that predates the [`PaymentProcessor`] port.
///
/// [`PaymentProcessor`]: patternbook_app::ports::PaymentProcessor
#[derive(Debug, Default)]
pub struct LegacyPaymentSystem {
    handled: Cell<usize>,
}

impl LegacyPaymentSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a payment. Always succeeds.
    pub fn make_payment(&self, amount: f64) -> LegacyConfirmation {
        self.handled.set(self.handled.get() + 1);
        let transaction = TransactionId::new();
        tracing::debug!(%transaction, amount, "legacy payment processed");
        LegacyConfirmation {
            transaction,
            amount,
        }
    }

    /// Number of payments taken so far.
    #[must_use]
    pub fn handled(&self) -> usize {
        self.handled.get()
    }
}
