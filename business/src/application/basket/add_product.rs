use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::add_product::{
    AddProductToBasketParams, AddProductToBasketUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct AddProductToBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToBasketUseCase for AddProductToBasketUseCaseImpl {
    async fn execute(&self, params: AddProductToBasketParams) -> Result<(), BasketError> {
        let email = params.email.ok_or(BasketError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(BasketError::UserNotFound)?;

        if params.quantity <= 0 {
            return Err(BasketError::QuantityInvalid);
        }

        self.products
            .get_by_id(params.product_id)
            .await?
            .ok_or(BasketError::ProductNotFound)?;

        let mut basket = match self.repository.get_by_user(user.id).await? {
            Some(basket) => basket,
            None => {
                let basket = Basket::new(user.id);
                self.repository.create(&basket).await?;
                basket
            }
        };

        basket.add_product(params.product_id, params.quantity);

        // The total is re-derived from current prices, never adjusted in place.
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
            "Added product {} (x{}) to basket of user {}",
            params.product_id, params.quantity, user.id
        ));
        Ok(())
    }
}
