use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::role::errors::RoleError;
use crate::domain::role::model::Role;

pub struct GetRoleByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetRoleByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRoleByIdParams) -> Result<Role, RoleError>;
}
