#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("review.not_found")]
    NotFound,
    #[error("review.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
