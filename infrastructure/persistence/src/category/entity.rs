use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(self.id, self.name, self.created_at)
    }
}
