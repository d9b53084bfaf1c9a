use async_trait::async_trait;

use crate::domain::verification::errors::VerificationError;

pub struct ConfirmVerificationCodeParams {
    pub email: String,
    pub code: String,
}

#[async_trait]
pub trait ConfirmVerificationCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ConfirmVerificationCodeParams,
    ) -> Result<(), VerificationError>;
}
