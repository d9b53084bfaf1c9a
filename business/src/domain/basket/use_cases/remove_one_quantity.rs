use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserEmail;

pub struct RemoveOneQuantityParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveOneQuantityUseCase: Send + Sync {
    async fn execute(&self, params: RemoveOneQuantityParams) -> Result<(), BasketError>;
}
