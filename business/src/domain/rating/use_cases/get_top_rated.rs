use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::rating::errors::RatingError;

pub struct GetTopRatedParams {
    pub count: i64,
}

#[async_trait]
pub trait GetTopRatedUseCase: Send + Sync {
    async fn execute(&self, params: GetTopRatedParams) -> Result<Vec<Product>, RatingError>;
}
