use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Free-text review tied to (user, product). No moderation, length limit,
/// or duplicate check.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, product_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        product_id: Uuid,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            content,
            created_at,
        }
    }
}
