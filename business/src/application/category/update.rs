use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .get_by_id(params.id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        if params.name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        category.name = params.name;

        let rows = self.repository.save(&category).await?;
        if rows == 0 {
            return Err(CategoryError::CommitFailed);
        }

        self.logger
            .info(&format!("Category {} renamed", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
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
    async fn should_rename_existing_category() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(Some(Category::from_repository(
                id,
                "Electronics".to_string(),
                Utc::now(),
            )))
        });
        repo.expect_save()
            .withf(|category: &Category| category.name == "Gadgets")
            .returning(|_| Ok(1));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(UpdateCategoryParams {
                id: Uuid::new_v4(),
                name: "Gadgets".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(category.name, "Gadgets");
    }

    #[tokio::test]
    async fn should_fail_when_category_unknown() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: Uuid::new_v4(),
                name: "Gadgets".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }
}
