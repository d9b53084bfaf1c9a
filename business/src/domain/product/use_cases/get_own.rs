use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserEmail;

pub struct GetOwnProductsParams {
    pub email: Option<UserEmail>,
}

#[async_trait]
pub trait GetOwnProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetOwnProductsParams) -> Result<Vec<Product>, ProductError>;
}
