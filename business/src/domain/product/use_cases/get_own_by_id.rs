use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserEmail;

pub struct GetOwnProductByIdParams {
    pub email: Option<UserEmail>,
    pub id: Uuid,
}

#[async_trait]
pub trait GetOwnProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetOwnProductByIdParams) -> Result<Product, ProductError>;
}
