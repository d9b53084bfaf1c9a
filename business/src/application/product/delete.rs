use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::user::repository::UserRepository;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        let email = params.email.ok_or(ProductError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ProductError::UserNotFound)?;

        let product = self
            .repository
            .get_by_user_and_id(user.id, params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        let rows = self.repository.delete(product.id).await?;
        if rows == 0 {
            return Err(ProductError::NotFound);
        }

        self.logger.info(&format!(
            "Product {} deleted by user {}",
            product.id, user.id
        ));
        Ok(())
    }
}
