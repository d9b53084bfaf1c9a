use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::repository::RatingRepository;
use crate::domain::rating::use_cases::get_product_rating::{
    GetProductRatingParams, GetProductRatingUseCase,
};

pub struct GetProductRatingUseCaseImpl {
    pub repository: Arc<dyn RatingRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductRatingUseCase for GetProductRatingUseCaseImpl {
    async fn execute(&self, params: GetProductRatingParams) -> Result<BigDecimal, RatingError> {
        self.repository
            .average_for_product(params.product_id)
            .await?
            .ok_or(RatingError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::rating::model::Rating;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub RatingRepo {}

        #[async_trait]
        impl RatingRepository for RatingRepo {
            async fn add(&self, rating: &Rating) -> Result<BigDecimal, RepositoryError>;
            async fn average_for_product(&self, product_id: Uuid) -> Result<Option<BigDecimal>, RepositoryError>;
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
    async fn should_return_average_when_ratings_exist() {
        let mut repo = MockRatingRepo::new();
        repo.expect_average_for_product()
            .returning(|_| Ok(Some(BigDecimal::from_str("4.33").unwrap())));

        let use_case = GetProductRatingUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let average = use_case
            .execute(GetProductRatingParams {
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(average, BigDecimal::from_str("4.33").unwrap());
    }

    #[tokio::test]
    async fn should_fail_when_product_has_no_ratings() {
        let mut repo = MockRatingRepo::new();
        repo.expect_average_for_product().returning(|_| Ok(None));

        let use_case = GetProductRatingUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductRatingParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RatingError::NotFound));
    }
}
