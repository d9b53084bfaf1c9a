use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::rating::errors::RatingError;

#[async_trait]
pub trait GetProductsByRatingUseCase: Send + Sync {
    /// All products sorted by average rating, best first.
    async fn execute(&self) -> Result<Vec<Product>, RatingError>;
}
