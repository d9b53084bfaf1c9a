use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::user::repository::UserRepository;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let email = params.email.ok_or(ProductError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ProductError::UserNotFound)?;

        let mut product = self
            .repository
            .get_by_user_and_id(user.id, params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if params.price < BigDecimal::from(0) {
            return Err(ProductError::PriceNegative);
        }

        product.name = params.name;
        product.description = params.description;
        product.price = params.price;

        let rows = self.repository.save(&product).await?;
        if rows == 0 {
            return Err(ProductError::NotFound);
        }

        self.logger.info(&format!(
            "Product {} updated by user {}",
            product.id, user.id
        ));
        Ok(product)
    }
}
