#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("rating.value_out_of_range")]
    ValueOutOfRange,
    #[error("rating.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
