use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserEmail;

/// Raw uploaded file as received by the transport layer.
pub struct UploadedImage {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

pub struct CreateProductParams {
    pub email: Option<UserEmail>,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub images: Vec<UploadedImage>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
