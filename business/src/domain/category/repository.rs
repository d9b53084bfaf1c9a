use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
}
