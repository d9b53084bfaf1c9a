use uuid::Uuid;

use crate::domain::shared::value_objects::UserEmail;

/// Account record managed by the external identity provider.
///
/// The backend never creates or mutates users; it only resolves the email
/// claim on a request to a stored account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: UserEmail,
    pub username: String,
}

impl User {
    pub fn from_repository(id: Uuid, email: UserEmail, username: String) -> Self {
        Self {
            id,
            email,
            username,
        }
    }
}
