use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::logger::Logger;
use crate::domain::verification::code_store::VerificationCodeStore;
use crate::domain::verification::errors::VerificationError;
use crate::domain::verification::use_cases::request_code::{
    CODE_TTL, RequestVerificationCodeParams, RequestVerificationCodeUseCase,
};

pub struct RequestVerificationCodeUseCaseImpl {
    pub store: Arc<dyn VerificationCodeStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestVerificationCodeUseCase for RequestVerificationCodeUseCaseImpl {
    async fn execute(
        &self,
        params: RequestVerificationCodeParams,
    ) -> Result<String, VerificationError> {
        if self.store.get(&params.email).await?.is_some() {
            return Err(VerificationError::ResendTooSoon);
        }

        let code = format!("{}", rand::rng().random_range(100_000..=999_999));
        self.store.put(&params.email, &code, CODE_TTL).await?;

        self.logger
            .info(&format!("Verification code issued for {}", params.email));
        Ok(code)
    }
}
