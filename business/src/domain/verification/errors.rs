#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("verification.resend_too_soon")]
    ResendTooSoon,
    #[error("verification.invalid_code")]
    InvalidCode,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
