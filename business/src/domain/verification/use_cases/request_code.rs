use std::time::Duration;

use async_trait::async_trait;

use crate::domain::verification::errors::VerificationError;

/// Codes stay valid for this long; a new code for the same email cannot be
/// requested while a live one exists.
pub const CODE_TTL: Duration = Duration::from_secs(120);

pub struct RequestVerificationCodeParams {
    pub email: String,
}

#[async_trait]
pub trait RequestVerificationCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RequestVerificationCodeParams,
    ) -> Result<String, VerificationError>;
}
