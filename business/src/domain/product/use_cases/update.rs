use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserEmail;

pub struct UpdateProductParams {
    pub email: Option<UserEmail>,
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
