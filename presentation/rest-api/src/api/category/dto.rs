use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CategoryRequest {
    /// Category name (cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category identifier
    pub id: String,
    /// Category name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            created_at: category.created_at,
        }
    }
}
