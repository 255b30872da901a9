//! Payment port — the contract every payment system is used through.

use patternbook_domain::payment::PaymentReceipt;

/// Takes a payment of `amount` and returns proof of it.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64) -> PaymentReceipt;
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for &T {
    fn process_payment(&self, amount: f64) -> PaymentReceipt {
        (**self).process_payment(amount)
    }
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for Box<T> {
    fn process_payment(&self, amount: f64) -> PaymentReceipt {
        (**self).process_payment(amount)
    }
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for std::sync::Arc<T> {
    fn process_payment(&self, amount: f64) -> PaymentReceipt {
        (**self).process_payment(amount)
    }
}
