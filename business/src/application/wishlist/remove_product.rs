use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove_product::{
    RemoveProductFromWishlistParams, RemoveProductFromWishlistUseCase,
};

pub struct RemoveProductFromWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromWishlistUseCase for RemoveProductFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveProductFromWishlistParams) -> Result<(), WishlistError> {
        let email = params.email.ok_or(WishlistError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(WishlistError::UserNotFound)?;

        let mut wishlist = self
            .repository
            .get_by_user(user.id)
            .await?
            .ok_or(WishlistError::NotFound)?;

        if !wishlist.remove_product(params.product_id) {
            return Err(WishlistError::ItemNotFound);
        }

        let rows = self.repository.save(&wishlist).await?;
        if rows == 0 {
            return Err(WishlistError::CommitFailed);
        }

        self.logger.info(&format!(
            "Removed product {} from wishlist of user {}",
            params.product_id, user.id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
    use crate::domain::wishlist::model::Wishlist;
    use mockall::mock;
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

        let use_case = RemoveProductFromWishlistUseCaseImpl {
            repository: Arc::new(wishlists),
            users: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromWishlistParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }

    #[tokio::test]
    async fn should_fail_when_product_not_in_wishlist() {
        let user = some_user();
        let user_id = user.id;

        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let mut wishlists = MockWishlistRepo::new();
        wishlists
            .expect_get_by_user()
            .returning(move |_| Ok(Some(Wishlist::new(user_id))));

        let use_case = RemoveProductFromWishlistUseCaseImpl {
            repository: Arc::new(wishlists),
            users: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromWishlistParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_remove_product_and_save() {
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
        wishlists
            .expect_save()
            .withf(|wishlist: &Wishlist| wishlist.items.is_empty())
            .returning(|_| Ok(1));

        let use_case = RemoveProductFromWishlistUseCaseImpl {
            repository: Arc::new(wishlists),
            users: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromWishlistParams {
                email: Some(UserEmail::new("alice@example.com")),
                product_id,
            })
            .await;

        assert!(result.is_ok());
    }
}
