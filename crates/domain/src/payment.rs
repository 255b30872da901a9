//! Payment receipts returned by any payment processor.

use serde::{Deserialize, Serialize};

use crate::id::TransactionId;

/// Proof that a payment went through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction: TransactionId,
    pub amount: f64,
    /// Name of the system that handled the payment.
    pub processor: String,
}

impl std::fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processing payment of: ${} using the {} system.",
            self.amount, self.processor
        )
    }
}
