use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_user_basket::{
    BasketItemSnapshot, BasketSnapshot, GetUserBasketParams, GetUserBasketUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct GetUserBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserBasketUseCase for GetUserBasketUseCaseImpl {
    async fn execute(&self, params: GetUserBasketParams) -> Result<BasketSnapshot, BasketError> {
        let email = params.email.ok_or(BasketError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(BasketError::UserNotFound)?;

        let basket = self
            .repository
            .get_by_user(user.id)
            .await?
            .ok_or(BasketError::NotFound)?;

        // Lines carry the current catalog price; items whose product has
        // since been deleted are dropped from the snapshot.
        let mut items = Vec::with_capacity(basket.items.len());
        let mut total = BigDecimal::from(0);
        for item in &basket.items {
            let Some(product) = self.products.get_by_id(item.product_id).await? else {
                self.logger.warn(&format!(
                    "Basket {} references missing product {}",
                    basket.id, item.product_id
                ));
                continue;
            };
            total += &product.price * BigDecimal::from(item.quantity);
            items.push(BasketItemSnapshot {
                product_id: product.id,
                product_name: product.name,
                product_price: product.price,
                quantity: item.quantity,
            });
        }

        Ok(BasketSnapshot {
            user_id: user.id,
            total_price: total,
            items,
        })
    }
}
