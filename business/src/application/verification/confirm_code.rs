use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::verification::code_store::VerificationCodeStore;
use crate::domain::verification::errors::VerificationError;
use crate::domain::verification::use_cases::confirm_code::{
    ConfirmVerificationCodeParams, ConfirmVerificationCodeUseCase,
};

pub struct ConfirmVerificationCodeUseCaseImpl {
    pub store: Arc<dyn VerificationCodeStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmVerificationCodeUseCase for ConfirmVerificationCodeUseCaseImpl {
    async fn execute(
        &self,
        params: ConfirmVerificationCodeParams,
    ) -> Result<(), VerificationError> {
        // An expired or never-issued code reads the same as a wrong one.
        let stored = self.store.get(&params.email).await?;
        match stored {
            Some(code) if code == params.code => {
                self.store.remove(&params.email).await?;
                self.logger
                    .info(&format!("Email {} verified", params.email));
                Ok(())
            }
            _ => Err(VerificationError::InvalidCode),
        }
    }
}
