use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::verification::code_store::VerificationCodeStore;

/// Process-local code store. Codes expire lazily: an entry past its
/// deadline is removed on the next read.
pub struct InMemoryCodeStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeStore for InMemoryCodeStore {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().await;
        entries.insert(email.to_string(), (code.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, RepositoryError> {
        let mut entries = self.entries.lock().await;

        match entries.get(email) {
            Some((code, deadline)) if Instant::now() < *deadline => Ok(Some(code.clone())),
            Some(_) => {
                entries.remove(email);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, email: &str) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().await;
        entries.remove(email);
        Ok(())
    }
}
