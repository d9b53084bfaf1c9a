use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::role::errors::RoleError;

pub struct AssignRoleToUserParams {
    pub user_id: Uuid,
    pub role_name: String,
}

#[async_trait]
pub trait AssignRoleToUserUseCase: Send + Sync {
    async fn execute(&self, params: AssignRoleToUserParams) -> Result<(), RoleError>;
}
