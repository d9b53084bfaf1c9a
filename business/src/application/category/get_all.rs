use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        let categories = self.repository.get_all().await?;
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    async fn should_return_all_categories() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![Category::new("Electronics".to_string()).unwrap()]));

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories.len(), 1);
    }
}
