use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Basket;

/// Basket store port. One basket per user at most.
///
/// `save` persists the whole aggregate (basket row plus its full item set) in
/// one commit and reports affected rows; concurrent saves of the same basket
/// are last-write-wins.
#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Basket>, RepositoryError>;
    async fn create(&self, basket: &Basket) -> Result<(), RepositoryError>;
    async fn save(&self, basket: &Basket) -> Result<u64, RepositoryError>;
}
