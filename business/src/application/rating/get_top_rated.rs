use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::use_cases::get_top_rated::{GetTopRatedParams, GetTopRatedUseCase};

pub struct GetTopRatedUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTopRatedUseCase for GetTopRatedUseCaseImpl {
    async fn execute(&self, params: GetTopRatedParams) -> Result<Vec<Product>, RatingError> {
        let products = self.products.get_top_rated(params.count).await?;
        if products.is_empty() {
            return Err(RatingError::NotFound);
        }
        Ok(products)
    }
}
