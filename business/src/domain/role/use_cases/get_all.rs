use async_trait::async_trait;

use crate::domain::role::errors::RoleError;
use crate::domain::role::model::Role;

#[async_trait]
pub trait GetAllRolesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Role>, RoleError>;
}
