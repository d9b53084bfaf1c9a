use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::repository::UserRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add_product::{
    AddProductToWishlistParams, AddProductToWishlistUseCase,
};

pub struct AddProductToWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToWishlistUseCase for AddProductToWishlistUseCaseImpl {
    async fn execute(&self, params: AddProductToWishlistParams) -> Result<(), WishlistError> {
        let email = params.email.ok_or(WishlistError::Unauthenticated)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(WishlistError::UserNotFound)?;

        self.products
            .get_by_id(params.product_id)
            .await?
            .ok_or(WishlistError::ProductNotFound)?;

        let mut wishlist = match self.repository.get_by_user(user.id).await? {
            Some(wishlist) => wishlist,
            None => {
                let wishlist = Wishlist::new(user.id);
                self.repository.create(&wishlist).await?;
                wishlist
            }
        };

        if wishlist.contains(params.product_id) {
            return Err(WishlistError::ProductAlreadyAdded);
        }
        wishlist.add_product(params.product_id);

        let rows = self.repository.save(&wishlist).await?;
        if rows == 0 {
            return Err(WishlistError::CommitFailed);
        }

        self.logger.info(&format!(
            "Added product {} to wishlist of user {}",
            params.product_id, user.id
        ));
        Ok(())
    }
}
