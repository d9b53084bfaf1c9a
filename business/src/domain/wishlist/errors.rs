#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("wishlist.not_found")]
    NotFound,
    #[error("wishlist.item_not_found")]
    ItemNotFound,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("wishlist.product_already_added")]
    ProductAlreadyAdded,
    #[error("wishlist.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
