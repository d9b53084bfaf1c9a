use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserEmail;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(self.id, UserEmail::new(self.email), self.username)
    }
}
