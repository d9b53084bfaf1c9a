use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Wishlist;

/// Wishlist store port. One wishlist per user at most; `save` persists the
/// whole aggregate in one commit and reports affected rows.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Wishlist>, RepositoryError>;
    async fn create(&self, wishlist: &Wishlist) -> Result<(), RepositoryError>;
    async fn save(&self, wishlist: &Wishlist) -> Result<u64, RepositoryError>;
}
