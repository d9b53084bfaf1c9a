use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::use_cases::get_products_by_rating::GetProductsByRatingUseCase;

pub struct GetProductsByRatingUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByRatingUseCase for GetProductsByRatingUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, RatingError> {
        let products = self.products.get_by_rating_descending().await?;
        if products.is_empty() {
            return Err(RatingError::NotFound);
        }
        Ok(products)
    }
}
