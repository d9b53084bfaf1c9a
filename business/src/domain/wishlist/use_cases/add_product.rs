use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserEmail;
use crate::domain::wishlist::errors::WishlistError;

pub struct AddProductToWishlistParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddProductToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToWishlistParams) -> Result<(), WishlistError>;
}
