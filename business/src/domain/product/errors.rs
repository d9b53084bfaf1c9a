#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.image_store_failed")]
    ImageStoreFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
