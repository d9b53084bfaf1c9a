use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::shared::value_objects::UserEmail;

pub struct AddReviewParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
    pub content: String,
}

#[async_trait]
pub trait AddReviewUseCase: Send + Sync {
    async fn execute(&self, params: AddReviewParams) -> Result<(), ReviewError>;
}
