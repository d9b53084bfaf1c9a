use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct AddRatingRequest {
    /// Rating value, 1 to 5
    pub value: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductRatingResponse {
    /// Product identifier
    pub product_id: String,
    /// Arithmetic mean over all ratings as a decimal string
    pub average: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddReviewRequest {
    /// Review text
    pub content: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    /// Review identifier
    pub id: String,
    /// Author identifier
    pub user_id: String,
    /// Reviewed product identifier
    pub product_id: String,
    /// Review text
    pub content: String,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            product_id: review.product_id.to_string(),
            content: review.content,
            created_at: review.created_at,
        }
    }
}
