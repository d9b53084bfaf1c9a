use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserEmail;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, email, username FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, UserEntity>("SELECT id, email, username FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
