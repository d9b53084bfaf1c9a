#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("basket.not_found")]
    NotFound,
    #[error("basket.item_not_found")]
    ItemNotFound,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("basket.quantity_invalid")]
    QuantityInvalid,
    #[error("basket.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
