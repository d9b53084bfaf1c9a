use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_total_price::{GetTotalPriceParams, GetTotalPriceUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct GetTotalPriceUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTotalPriceUseCase for GetTotalPriceUseCaseImpl {
    async fn execute(&self, params: GetTotalPriceParams) -> Result<BigDecimal, BasketError> {
        let email = params.email.ok_or(BasketError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(BasketError::UserNotFound)?;

        let Some(basket) = self.repository.get_by_user(user.id).await? else {
            return Ok(BigDecimal::from(0));
        };

        let mut total = BigDecimal::from(0);
        for item in &basket.items {
            if let Some(product) = self.products.get_by_id(item.product_id).await? {
                total += product.price * BigDecimal::from(item.quantity);
            }
        }

        Ok(total)
    }
}
