use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_own::{GetOwnProductsParams, GetOwnProductsUseCase};
use crate::domain::user::repository::UserRepository;

pub struct GetOwnProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOwnProductsUseCase for GetOwnProductsUseCaseImpl {
    async fn execute(&self, params: GetOwnProductsParams) -> Result<Vec<Product>, ProductError> {
        let email = params.email.ok_or(ProductError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ProductError::UserNotFound)?;

        let products = self.repository.get_by_user(user.id).await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
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
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
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
            UserEmail::new("seller@example.com"),
            "seller".to_string(),
        )
    }

    #[tokio::test]
    async fn should_scope_products_to_the_caller() {
        let user = some_user();
        let user_id = user.id;

        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut repo = MockProductRepo::new();
        repo.expect_get_by_user()
            .withf(move |id| *id == user_id)
            .returning(move |user_id| {
                Ok(vec![Product::from_repository(
                    Uuid::new_v4(),
                    user_id,
                    Uuid::new_v4(),
                    "Keyboard".to_string(),
                    String::new(),
                    BigDecimal::from(60),
                    None,
                    vec![],
                    Utc::now(),
                )])
            });

        let use_case = GetOwnProductsUseCaseImpl {
            repository: Arc::new(repo),
            users: Arc::new(users),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetOwnProductsParams {
                email: Some(UserEmail::new("seller@example.com")),
            })
            .await
            .unwrap();

        assert_eq!(products[0].user_id, user_id);
    }

    #[tokio::test]
    async fn should_reject_when_not_logged_in() {
        let use_case = GetOwnProductsUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            users: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetOwnProductsParams { email: None }).await;

        assert!(matches!(result.unwrap_err(), ProductError::Unauthenticated));
    }
}
