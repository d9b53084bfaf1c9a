use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Rating;

/// Rating store port.
///
/// `add` inserts the rating row and refreshes the product's cached average
/// within a single transaction, returning the new average.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn add(&self, rating: &Rating) -> Result<BigDecimal, RepositoryError>;
    async fn average_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Option<BigDecimal>, RepositoryError>;
}
