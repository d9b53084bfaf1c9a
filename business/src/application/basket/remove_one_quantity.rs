use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::remove_one_quantity::{
    RemoveOneQuantityParams, RemoveOneQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct RemoveOneQuantityUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveOneQuantityUseCase for RemoveOneQuantityUseCaseImpl {
    async fn execute(&self, params: RemoveOneQuantityParams) -> Result<(), BasketError> {
        let email = params.email.ok_or(BasketError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(BasketError::UserNotFound)?;

        let mut basket = self
            .repository
            .get_by_user(user.id)
            .await?
            .ok_or(BasketError::NotFound)?;

        if !basket.remove_one_quantity(params.product_id) {
            return Err(BasketError::ItemNotFound);
        }

        let mut total = BigDecimal::from(0);
        for item in &basket.items {
            if let Some(product) = self.products.get_by_id(item.product_id).await? {
                total += product.price * BigDecimal::from(item.quantity);
            }
        }
        basket.total_price = total;

        let rows = self.repository.save(&basket).await?;
        if rows == 0 {
            return Err(BasketError::CommitFailed);
        }

        self.logger.info(&format!(
            "Decremented product {} in basket of user {}",
            params.product_id, user.id
        ));
        Ok(())
    }
}
