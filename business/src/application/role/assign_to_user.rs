use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::role::errors::RoleError;
use crate::domain::role::repository::RoleRepository;
use crate::domain::role::use_cases::assign_to_user::{
    AssignRoleToUserParams, AssignRoleToUserUseCase,
};
use crate::domain::user::repository::UserRepository;

pub struct AssignRoleToUserUseCaseImpl {
    pub repository: Arc<dyn RoleRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AssignRoleToUserUseCase for AssignRoleToUserUseCaseImpl {
    async fn execute(&self, params: AssignRoleToUserParams) -> Result<(), RoleError> {
        let user = self
            .users
            .find_by_id(params.user_id)
            .await?
            .ok_or(RoleError::UserNotFound)?;

        let role = self
            .repository
            .find_by_name(&params.role_name)
            .await?
            .ok_or(RoleError::NotFound)?;

        let rows = self
            .repository
            .assign_to_user(user.id, role.id)
            .await
            .map_err(|err| match err {
                RepositoryError::Duplicated => RoleError::AlreadyAssigned,
                other => RoleError::Repository(other),
            })?;
        if rows == 0 {
            return Err(RoleError::CommitFailed);
        }

        self.logger.info(&format!(
            "Role '{}' assigned to user {}",
            role.name, user.id
        ));
        Ok(())
    }
}
