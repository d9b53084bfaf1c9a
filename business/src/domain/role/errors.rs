#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    #[error("role.name_empty")]
    NameEmpty,
    #[error("role.already_exists")]
    AlreadyExists,
    #[error("role.not_found")]
    NotFound,
    #[error("role.user_not_found")]
    UserNotFound,
    #[error("role.already_assigned")]
    AlreadyAssigned,
    #[error("role.commit_failed")]
    CommitFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
