use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::role::errors::RoleError;
use crate::domain::role::repository::RoleRepository;
use crate::domain::role::use_cases::delete::{DeleteRoleParams, DeleteRoleUseCase};

pub struct DeleteRoleUseCaseImpl {
    pub repository: Arc<dyn RoleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRoleUseCase for DeleteRoleUseCaseImpl {
    async fn execute(&self, params: DeleteRoleParams) -> Result<(), RoleError> {
        let rows = self.repository.delete(params.id).await?;
        if rows == 0 {
            return Err(RoleError::NotFound);
        }

        self.logger.info(&format!("Role {} deleted", params.id));
        Ok(())
    }
}
