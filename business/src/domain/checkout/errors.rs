#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("auth.not_logged_in")]
    Unauthenticated,
    #[error("user.not_found")]
    UserNotFound,
    #[error("basket.not_found")]
    BasketNotFound,
    #[error("checkout.amount_mismatch")]
    AmountMismatch,
    #[error("checkout.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
