use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Catalog store port.
///
/// Single-row writes report affected rows so callers can surface zero-row
/// commits as failures. Concurrent writers are not coordinated here; the
/// last commit wins.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_user_and_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn get_by_rating_descending(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_top_rated(&self, count: i64) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
}
