use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<u64, RepositoryError>;
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
}
