//! # patternbook-adapter-legacy-payment
//!
//! Puts a [`LegacyPaymentSystem`] behind the
//! [`PaymentProcessor`](patternbook_app::ports::PaymentProcessor) port.
//!
//! The adapter forwards the amount untouched and translates the legacy
//! confirmation into a [`PaymentReceipt`]. There is no failure path.
//!
//! ## Dependency rule
//!
//! Depends on `patternbook-app` (port traits) and `patternbook-domain` only.

mod legacy;

use std::borrow::Borrow;

use patternbook_app::ports::PaymentProcessor;
use patternbook_domain::payment::PaymentReceipt;

pub use legacy::{LegacyConfirmation, LegacyPaymentSystem};

/// Name recorded on receipts produced through the adapter.
pub const PROCESSOR_NAME: &str = "legacy";

/// Adapts a [`LegacyPaymentSystem`] to the [`PaymentProcessor`] port.
///
/// `L` is anything that borrows as a legacy system: an owned value, a
/// reference or a shared pointer.
#[derive(Debug)]
pub struct PaymentAdapter<L> {
    legacy: L,
}

impl<L: Borrow<LegacyPaymentSystem>> PaymentAdapter<L> {
    pub fn new(legacy: L) -> Self {
        Self { legacy }
    }

    /// The wrapped legacy system.
    pub fn legacy(&self) -> &LegacyPaymentSystem {
        <L as Borrow<LegacyPaymentSystem>>::borrow(&self.legacy)
    }
}

impl<L: Borrow<LegacyPaymentSystem>> PaymentProcessor for PaymentAdapter<L> {
    #[tracing::instrument(skip(self))]
    fn process_payment(&self, amount: f64) -> PaymentReceipt {
        let confirmation = self.legacy().make_payment(amount);
        PaymentReceipt {
            transaction: confirmation.transaction,
            amount: confirmation.amount,
            processor: PROCESSOR_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_forward_amount_to_legacy_system() {
        let legacy = LegacyPaymentSystem::new();
        let adapter = PaymentAdapter::new(&legacy);

        let receipt = adapter.process_payment(100.0);

        assert!((receipt.amount - 100.0).abs() < f64::EPSILON);
        assert_eq!(receipt.processor, PROCESSOR_NAME);
        assert_eq!(legacy.handled(), 1);
    }

    #[test]
    fn should_own_legacy_system_when_given_by_value() {
        let adapter = PaymentAdapter::new(LegacyPaymentSystem::new());
        adapter.process_payment(5.0);
        adapter.process_payment(7.0);
        assert_eq!(adapter.legacy().handled(), 2);
    }

    #[test]
    fn should_work_behind_port_trait_object() {
        let processor: Box<dyn PaymentProcessor> =
            Box::new(PaymentAdapter::new(LegacyPaymentSystem::new()));
        let receipt = processor.process_payment(0.0);
        assert!(receipt.amount.abs() < f64::EPSILON);
    }

    #[test]
    fn should_pass_negative_amounts_through_unchecked() {
        let adapter = PaymentAdapter::new(LegacyPaymentSystem::new());
        let receipt = adapter.process_payment(-12.0);
        assert!((receipt.amount + 12.0).abs() < f64::EPSILON);
    }
}
