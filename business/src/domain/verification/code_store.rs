use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Short-lived storage for one-time verification codes, keyed by email.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), RepositoryError>;
    async fn get(&self, email: &str) -> Result<Option<String>, RepositoryError>;
    async fn remove(&self, email: &str) -> Result<(), RepositoryError>;
}
