use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserEmail;

pub struct AddProductToBasketParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[async_trait]
pub trait AddProductToBasketUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToBasketParams) -> Result<(), BasketError>;
}
