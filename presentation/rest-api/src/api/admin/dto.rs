use poem_openapi::Object;

use business::domain::role::model::Role;

#[derive(Debug, Clone, Object)]
pub struct CreateRoleRequest {
    /// Role name (unique, cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct AssignRoleRequest {
    /// Name of the role to grant
    pub role_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct RoleResponse {
    /// Role identifier
    pub id: String,
    /// Role name
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name,
        }
    }
}
