use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserEmail;

/// Snapshot line with the product name and price denormalized at read time.
#[derive(Debug, Clone)]
pub struct BasketItemSnapshot {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct BasketSnapshot {
    pub user_id: Uuid,
    pub total_price: BigDecimal,
    pub items: Vec<BasketItemSnapshot>,
}

pub struct GetUserBasketParams {
    pub email: Option<UserEmail>,
}

#[async_trait]
pub trait GetUserBasketUseCase: Send + Sync {
    async fn execute(&self, params: GetUserBasketParams) -> Result<BasketSnapshot, BasketError>;
}
