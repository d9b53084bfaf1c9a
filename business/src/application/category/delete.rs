use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        let rows = self.repository.delete(params.id).await?;
        if rows == 0 {
            return Err(CategoryError::NotFound);
        }

        self.logger.info(&format!("Category {} deleted", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
            async fn save(&self, category: &Category) -> Result<u64, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
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
    async fn should_delete_existing_category() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_delete().returning(|_| Ok(1));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_nothing_deleted() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_delete().returning(|_| Ok(0));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }
}
