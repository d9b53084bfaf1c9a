use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Role;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Role>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError>;
    async fn create(&self, role: &Role) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
    /// Fails with [`RepositoryError::Duplicated`] when the user already holds the role.
    async fn assign_to_user(&self, user_id: Uuid, role_id: Uuid) -> Result<u64, RepositoryError>;
}
