use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::role::errors::RoleError;

pub struct DeleteRoleParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteRoleUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRoleParams) -> Result<(), RoleError>;
}
