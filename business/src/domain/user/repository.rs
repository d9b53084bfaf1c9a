use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserEmail;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
}
