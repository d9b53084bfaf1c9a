use poem_openapi::Object;

use business::domain::checkout::receipt::PaymentReceipt;

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Amount to pay as a decimal string; must equal the basket total exactly
    pub amount: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptResponse {
    /// Paid amount as a decimal string
    pub amount: String,
    /// Formatted plain-text receipt
    pub receipt: String,
}

impl From<PaymentReceipt> for ReceiptResponse {
    fn from(receipt: PaymentReceipt) -> Self {
        Self {
            amount: receipt.amount.to_string(),
            receipt: receipt.receipt,
        }
    }
}
