use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::rating::errors::RatingError;
use crate::domain::shared::value_objects::UserEmail;

pub struct AddRatingParams {
    pub email: Option<UserEmail>,
    pub product_id: Uuid,
    pub value: i32,
}

#[async_trait]
pub trait AddRatingUseCase: Send + Sync {
    async fn execute(&self, params: AddRatingParams) -> Result<(), RatingError>;
}
