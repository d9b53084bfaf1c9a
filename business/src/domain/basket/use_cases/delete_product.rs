use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserEmail;

pub struct DeleteProductFromBasketParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
}

#[async_trait]
pub trait DeleteProductFromBasketUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductFromBasketParams) -> Result<(), BasketError>;
}
