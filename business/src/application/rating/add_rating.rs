use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::model::Rating;
use crate::domain::rating::repository::RatingRepository;
use crate::domain::rating::use_cases::add_rating::{AddRatingParams, AddRatingUseCase};
use crate::domain::user::repository::UserRepository;

pub struct AddRatingUseCaseImpl {
    pub repository: Arc<dyn RatingRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddRatingUseCase for AddRatingUseCaseImpl {
    async fn execute(&self, params: AddRatingParams) -> Result<(), RatingError> {
        let email = params.email.ok_or(RatingError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(RatingError::UserNotFound)?;

        self.products
            .get_by_id(params.product_id)
            .await?
            .ok_or(RatingError::ProductNotFound)?;

        let rating = Rating::new(user.id, params.product_id, params.value)?;

        // Inserts the row and refreshes the cached average in one commit.
        let average = self.repository.add(&rating).await?;

        self.logger.info(&format!(
            "Rating {} added for product {}; average is now {}",
            params.value, params.product_id, average
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
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
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
        }
    }

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

    fn some_user() -> User {
        User::from_repository(
            Uuid::new_v4(),
            UserEmail::new("alice@example.com"),
            "alice".to_string(),
        )
    }

    fn some_product(id: Uuid) -> Product {
        Product::from_repository(
            id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Keyboard".to_string(),
            String::new(),
            BigDecimal::from(60),
            None,
            vec![],
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_add_rating_for_existing_product() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(some_user())));

        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(Some(some_product(id))));

        let mut ratings = MockRatingRepo::new();
        ratings
            .expect_add()
            .withf(|rating: &Rating| rating.value == 4)
            .returning(|_| Ok(BigDecimal::from_str("4.00").unwrap()));

        let use_case = AddRatingUseCaseImpl {
            repository: Arc::new(ratings),
            users: Arc::new(users),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddRatingParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
                value: 4,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_value_out_of_range() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(some_user())));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(Some(some_product(id))));

        let use_case = AddRatingUseCaseImpl {
            repository: Arc::new(MockRatingRepo::new()),
            users: Arc::new(users),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddRatingParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
                value: 6,
            })
            .await;

        assert!(matches!(result.unwrap_err(), RatingError::ValueOutOfRange));
    }

    #[tokio::test]
    async fn should_reject_rating_for_unknown_product() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(some_user())));
        let mut products = MockProductRepo::new();
        products.expect_get_by_id().returning(|_| Ok(None));

        let use_case = AddRatingUseCaseImpl {
            repository: Arc::new(MockRatingRepo::new()),
            users: Arc::new(users),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddRatingParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
                value: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), RatingError::ProductNotFound));
    }
}
