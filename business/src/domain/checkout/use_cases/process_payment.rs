use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::receipt::PaymentReceipt;
use crate::domain::shared::value_objects::UserEmail;

pub struct ProcessPaymentParams {
    pub email: Option<UserEmail>,
    pub amount: BigDecimal,
}

#[async_trait]
pub trait ProcessPaymentUseCase: Send + Sync {
    /// Validates the payment amount against the basket total with exact
    /// decimal equality, clears the basket, and returns the receipt.
    async fn execute(&self, params: ProcessPaymentParams)
    -> Result<PaymentReceipt, CheckoutError>;
}
