use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::role::errors::RoleError;
use crate::domain::role::model::Role;
use crate::domain::role::repository::RoleRepository;
use crate::domain::role::use_cases::create::{CreateRoleParams, CreateRoleUseCase};

pub struct CreateRoleUseCaseImpl {
    pub repository: Arc<dyn RoleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRoleUseCase for CreateRoleUseCaseImpl {
    async fn execute(&self, params: CreateRoleParams) -> Result<Role, RoleError> {
        let role = Role::new(params.name)?;

        if self.repository.find_by_name(&role.name).await?.is_some() {
            return Err(RoleError::AlreadyExists);
        }

        let rows = self.repository.create(&role).await.map_err(|err| {
            // The unique index can still fire under a concurrent create.
            match err {
                crate::domain::errors::RepositoryError::Duplicated => RoleError::AlreadyExists,
                other => RoleError::Repository(other),
            }
        })?;
        if rows == 0 {
            return Err(RoleError::CommitFailed);
        }

        self.logger
            .info(&format!("Role '{}' created ({})", role.name, role.id));
        Ok(role)
    }
}
