use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::delete_product::{
    DeleteProductFromBasketParams, DeleteProductFromBasketUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;

pub struct DeleteProductFromBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductFromBasketUseCase for DeleteProductFromBasketUseCaseImpl {
    async fn execute(&self, params: DeleteProductFromBasketParams) -> Result<(), BasketError> {
        let email = params.email.ok_or(BasketError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(BasketError::UserNotFound)?;

        let mut basket = self
            .repository
            .get_by_user(user.id)
            .await?
            .ok_or(BasketError::NotFound)?;

        if basket.remove_product(params.product_id) == 0 {
            return Err(BasketError::ItemNotFound);
        }

        let mut total = BigDecimal::from(0);
        for item in &basket.items {
            if let Some(product) = self.products.get_by_id(item.product_id).await? {
                total += product.price * BigDecimal::from(item.quantity);
            }
        }
        basket.total_price = total;

        let rows = self.repository.save(&basket).await?;
        if rows == 0 {
            return Err(BasketError::CommitFailed);
        }

        self.logger.info(&format!(
            "Removed product {} from basket of user {}",
            params.product_id, user.id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::Basket;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub BasketRepo {}

        #[async_trait]
        impl BasketRepository for BasketRepo {
            async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Basket>, RepositoryError>;
            async fn create(&self, basket: &Basket) -> Result<(), RepositoryError>;
            async fn save(&self, basket: &Basket) -> Result<u64, RepositoryError>;
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

    #[tokio::test]
    async fn should_fail_when_item_not_in_basket() {
        let user = some_user();
        let user_id = user.id;

        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let mut baskets = MockBasketRepo::new();
        baskets
            .expect_get_by_user()
            .returning(move |_| Ok(Some(Basket::new(user_id))));

        let use_case = DeleteProductFromBasketUseCaseImpl {
            repository: Arc::new(baskets),
            users: Arc::new(users),
            products: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductFromBasketParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), BasketError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_remove_item_and_rederive_total() {
        let removed_id = Uuid::new_v4();
        let kept_id = Uuid::new_v4();
        let user = some_user();
        let user_id = user.id;

        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut baskets = MockBasketRepo::new();
        baskets.expect_get_by_user().returning(move |_| {
            let mut basket = Basket::new(user_id);
            basket.add_product(removed_id, 1);
            basket.add_product(kept_id, 2);
            Ok(Some(basket))
        });
        baskets
            .expect_save()
            .withf(move |basket: &Basket| {
                basket.items.len() == 1
                    && basket.items[0].product_id == kept_id
                    && basket.total_price == BigDecimal::from_str("8.00").unwrap()
            })
            .returning(|_| Ok(1));

        let mut products = MockProductRepo::new();
        products.expect_get_by_id().returning(|id| {
            Ok(Some(Product::from_repository(
                id,
                Uuid::new_v4(),
                Uuid::new_v4(),
                "USB Hub".to_string(),
                String::new(),
                BigDecimal::from_str("4.00").unwrap(),
                None,
                vec![],
                Utc::now(),
            )))
        });

        let use_case = DeleteProductFromBasketUseCaseImpl {
            repository: Arc::new(baskets),
            users: Arc::new(users),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductFromBasketParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: removed_id,
            })
            .await;

        assert!(result.is_ok());
    }
}
