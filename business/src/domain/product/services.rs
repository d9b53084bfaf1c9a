use async_trait::async_trait;

use super::errors::ProductError;

/// Service port for persisting uploaded product images.
///
/// Implementations generate a unique file name from the original one and
/// return the stored path. The backing directory is expected to exist for
/// the lifetime of the process.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, original_name: &str, bytes: Vec<u8>) -> Result<String, ProductError>;
}
