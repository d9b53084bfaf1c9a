use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_product_reviews::{
    GetProductReviewsParams, GetProductReviewsUseCase,
};

pub struct GetProductReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductReviewsUseCase for GetProductReviewsUseCaseImpl {
    async fn execute(&self, params: GetProductReviewsParams) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.repository.get_by_product(params.product_id).await?;
        if reviews.is_empty() {
            return Err(ReviewError::NotFound);
        }
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ReviewRepo {}

        #[async_trait]
        impl ReviewRepository for ReviewRepo {
            async fn create(&self, review: &Review) -> Result<u64, RepositoryError>;
            async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
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
    async fn should_return_reviews_for_product() {
        let mut repo = MockReviewRepo::new();
        repo.expect_get_by_product().returning(|product_id| {
            Ok(vec![Review::new(
                Uuid::new_v4(),
                product_id,
                "Solid build quality".to_string(),
            )])
        });

        let use_case = GetProductReviewsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let reviews = use_case
            .execute(GetProductReviewsParams {
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(reviews.len(), 1);
    }

    #[tokio::test]
    async fn should_fail_when_product_has_no_reviews() {
        let mut repo = MockReviewRepo::new();
        repo.expect_get_by_product().returning(|_| Ok(vec![]));

        let use_case = GetProductReviewsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductReviewsParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::NotFound));
    }
}
