use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::services::ImageStore;

/// Stores product images as files under a local directory.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub async fn new(root: PathBuf) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, original_name: &str, bytes: Vec<u8>) -> Result<String, ProductError> {
        // Prefixing with a fresh id keeps uploads with the same original
        // name from clobbering each other.
        let file_name = format!("{}-{}", Uuid::new_v4(), original_name);
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|_| ProductError::ImageStoreFailed)?;

        Ok(path.to_string_lossy().into_owned())
    }
}
