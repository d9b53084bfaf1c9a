use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserEmail;

pub struct GetTotalPriceParams {
    pub email: Option<UserEmail>,
}

#[async_trait]
pub trait GetTotalPriceUseCase: Send + Sync {
    /// Returns 0 when the user has no basket yet; absence is not an error
    /// for this read.
    async fn execute(&self, params: GetTotalPriceParams) -> Result<BigDecimal, BasketError>;
}
