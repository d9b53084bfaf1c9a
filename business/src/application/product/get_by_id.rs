use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.repository
            .get_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_user_and_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn get_by_rating_descending(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_top_rated(&self, count: i64) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<u64, RepositoryError>;
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
    async fn should_return_product_when_found() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(Some(Product::from_repository(
                id,
                Uuid::new_v4(),
                Uuid::new_v4(),
                "Keyboard".to_string(),
                String::new(),
                BigDecimal::from(60),
                None,
                vec![],
                Utc::now(),
            )))
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let id = Uuid::new_v4();
        let product = use_case.execute(GetProductByIdParams { id }).await.unwrap();

        assert_eq!(product.id, id);
    }

    #[tokio::test]
    async fn should_fail_when_product_unknown() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
