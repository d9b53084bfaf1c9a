use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::rating::errors::RatingError;

pub struct GetProductRatingParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetProductRatingUseCase: Send + Sync {
    /// Arithmetic mean over all rating rows; fails when no ratings exist.
    async fn execute(&self, params: GetProductRatingParams) -> Result<BigDecimal, RatingError>;
}
