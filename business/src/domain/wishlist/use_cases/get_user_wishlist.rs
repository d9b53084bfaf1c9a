use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserEmail;
use crate::domain::wishlist::errors::WishlistError;

/// Snapshot line with the product name and price denormalized at read time.
#[derive(Debug, Clone)]
pub struct WishlistItemSnapshot {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct WishlistSnapshot {
    pub user_id: Uuid,
    pub items: Vec<WishlistItemSnapshot>,
}

pub struct GetUserWishlistParams {
    pub email: Option<UserEmail>,
}

#[async_trait]
pub trait GetUserWishlistUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetUserWishlistParams,
    ) -> Result<WishlistSnapshot, WishlistError>;
}
