use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        })
    }

    pub fn from_repository(id: Uuid, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_category_when_name_valid() {
        let result = Category::new("Electronics".to_string());

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Electronics");
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Category::new("  ".to_string());

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
