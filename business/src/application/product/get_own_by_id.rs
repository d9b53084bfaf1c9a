use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_own_by_id::{
    GetOwnProductByIdParams, GetOwnProductByIdUseCase,
};
use crate::domain::user::repository::UserRepository;

pub struct GetOwnProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOwnProductByIdUseCase for GetOwnProductByIdUseCaseImpl {
    async fn execute(&self, params: GetOwnProductByIdParams) -> Result<Product, ProductError> {
        let email = params.email.ok_or(ProductError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ProductError::UserNotFound)?;

        // Scoped by owner, so another seller's product id reads as absent.
        self.repository
            .get_by_user_and_id(user.id, params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}
