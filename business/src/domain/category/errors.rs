#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
