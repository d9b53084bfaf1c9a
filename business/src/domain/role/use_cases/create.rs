use async_trait::async_trait;

use crate::domain::role::errors::RoleError;
use crate::domain::role::model::Role;

pub struct CreateRoleParams {
    pub name: String,
}

#[async_trait]
pub trait CreateRoleUseCase: Send + Sync {
    async fn execute(&self, params: CreateRoleParams) -> Result<Role, RoleError>;
}
