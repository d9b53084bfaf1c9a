use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::domain::basket::repository::BasketRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::receipt::{PaymentReceipt, generate_receipt};
use crate::domain::checkout::use_cases::process_payment::{
    ProcessPaymentParams, ProcessPaymentUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct ProcessPaymentUseCaseImpl {
    pub baskets: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessPaymentUseCase for ProcessPaymentUseCaseImpl {
    async fn execute(
        &self,
        params: ProcessPaymentParams,
    ) -> Result<PaymentReceipt, CheckoutError> {
        let email = params.email.ok_or(CheckoutError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(CheckoutError::UserNotFound)?;

        let mut basket = self
            .baskets
            .get_by_user(user.id)
            .await?
            .ok_or(CheckoutError::BasketNotFound)?;

        // The paid amount must match the freshly derived total exactly,
        // decimal for decimal. An already emptied basket totals 0, so a
        // repeated payment fails here too.
        let mut total = BigDecimal::from(0);
        for item in &basket.items {
            if let Some(product) = self.products.get_by_id(item.product_id).await? {
                total += product.price * BigDecimal::from(item.quantity);
            }
        }

        if params.amount != total {
            self.logger.warn(&format!(
                "Payment of {} rejected for user {}: basket totals {}",
                params.amount, user.id, total
            ));
            return Err(CheckoutError::AmountMismatch);
        }

        basket.clear();
        let rows = self.baskets.save(&basket).await?;
        if rows == 0 {
            return Err(CheckoutError::CommitFailed);
        }

        self.logger
            .info(&format!("Payment of {} accepted for user {}", total, user.id));

        let receipt = generate_receipt(&user.username, &params.amount, Utc::now());
        Ok(PaymentReceipt {
            amount: params.amount,
            receipt,
        })
    }
}
