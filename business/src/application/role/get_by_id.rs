use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::role::errors::RoleError;
use crate::domain::role::model::Role;
use crate::domain::role::repository::RoleRepository;
use crate::domain::role::use_cases::get_by_id::{GetRoleByIdParams, GetRoleByIdUseCase};

pub struct GetRoleByIdUseCaseImpl {
    pub repository: Arc<dyn RoleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRoleByIdUseCase for GetRoleByIdUseCaseImpl {
    async fn execute(&self, params: GetRoleByIdParams) -> Result<Role, RoleError> {
        self.repository
            .get_by_id(params.id)
            .await?
            .ok_or(RoleError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RoleRepo {}

        #[async_trait]
        impl RoleRepository for RoleRepo {
            async fn get_all(&self) -> Result<Vec<Role>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError>;
            async fn create(&self, role: &Role) -> Result<u64, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
            async fn assign_to_user(&self, user_id: Uuid, role_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_role_when_found() {
        let mut repo = MockRoleRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(Role::from_repository(id, "Admin".to_string()))));

        let use_case = GetRoleByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let id = Uuid::new_v4();
        let role = use_case.execute(GetRoleByIdParams { id }).await.unwrap();

        assert_eq!(role.id, id);
    }

    #[tokio::test]
    async fn should_fail_when_role_unknown() {
        let mut repo = MockRoleRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetRoleByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRoleByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), RoleError::NotFound));
    }
}
