use uuid::Uuid;

use super::errors::RoleError;

#[derive(Debug, Clone)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}

impl Role {
    pub fn new(name: String) -> Result<Self, RoleError> {
        if name.trim().is_empty() {
            return Err(RoleError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    pub fn from_repository(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
