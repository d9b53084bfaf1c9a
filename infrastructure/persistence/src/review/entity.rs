use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::review::model::Review;

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Review {
        Review::from_repository(
            self.id,
            self.user_id,
            self.product_id,
            self.content,
            self.created_at,
        )
    }
}
