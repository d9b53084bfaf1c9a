use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_user_wishlist::{
    GetUserWishlistParams, GetUserWishlistUseCase, WishlistItemSnapshot, WishlistSnapshot,
};

pub struct GetUserWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserWishlistUseCase for GetUserWishlistUseCaseImpl {
    async fn execute(
        &self,
        params: GetUserWishlistParams,
    ) -> Result<WishlistSnapshot, WishlistError> {
        let email = params.email.ok_or(WishlistError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(WishlistError::UserNotFound)?;

        let wishlist = self
            .repository
            .get_by_user(user.id)
            .await?
            .ok_or(WishlistError::NotFound)?;

        let mut items = Vec::with_capacity(wishlist.items.len());
        for item in &wishlist.items {
            let Some(product) = self.products.get_by_id(item.product_id).await? else {
                self.logger.warn(&format!(
                    "Wishlist {} references missing product {}",
                    wishlist.id, item.product_id
                ));
                continue;
            };
            items.push(WishlistItemSnapshot {
                product_id: product.id,
                product_name: product.name,
                product_price: product.price,
            });
        }

        Ok(WishlistSnapshot {
            user_id: user.id,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
    use crate::domain::wishlist::model::Wishlist;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Wishlist>, RepositoryError>;
            async fn create(&self, wishlist: &Wishlist) -> Result<(), RepositoryError>;
            async fn save(&self, wishlist: &Wishlist) -> Result<u64, RepositoryError>;
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
    async fn should_fail_when_wishlist_missing() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(some_user())));
        let mut wishlists = MockWishlistRepo::new();
        wishlists.expect_get_by_user().returning(|_| Ok(None));

        let use_case = GetUserWishlistUseCaseImpl {
            repository: Arc::new(wishlists),
            users: Arc::new(users),
            products: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserWishlistParams {
                email: Some(UserEmail::new("alice@example.com")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }

    #[tokio::test]
    async fn should_snapshot_items_with_names_and_prices() {
        let product_id = Uuid::new_v4();
        let user = some_user();
        let user_id = user.id;

        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut wishlists = MockWishlistRepo::new();
        wishlists.expect_get_by_user().returning(move |_| {
            let mut wishlist = Wishlist::new(user_id);
            wishlist.add_product(product_id);
            Ok(Some(wishlist))
        });

        let mut products = MockProductRepo::new();
        products.expect_get_by_id().returning(|id| {
            Ok(Some(Product::from_repository(
                id,
                Uuid::new_v4(),
                Uuid::new_v4(),
                "Desk Lamp".to_string(),
                String::new(),
                BigDecimal::from_str("35.00").unwrap(),
                None,
                vec![],
                Utc::now(),
            )))
        });

        let use_case = GetUserWishlistUseCaseImpl {
            repository: Arc::new(wishlists),
            users: Arc::new(users),
            products: Arc::new(products),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(GetUserWishlistParams {
                email: Some(UserEmail::new("alice@example.com")),
            })
            .await
            .unwrap();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].product_name, "Desk Lamp");
        assert_eq!(
            snapshot.items[0].product_price,
            BigDecimal::from_str("35.00").unwrap()
        );
    }
}
