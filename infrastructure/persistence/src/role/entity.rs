use sqlx::FromRow;
use uuid::Uuid;

use business::domain::role::model::Role;

#[derive(Debug, FromRow)]
pub struct RoleEntity {
    pub id: Uuid,
    pub name: String,
}

impl RoleEntity {
    pub fn into_domain(self) -> Role {
        Role::from_repository(self.id, self.name)
    }
}
