use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::role::model::Role;
use business::domain::role::repository::RoleRepository;

use super::entity::RoleEntity;

pub struct RoleRepositoryPostgres {
    pool: PgPool,
}

impl RoleRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => RepositoryError::DatabaseError,
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Role>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, RoleEntity>("SELECT id, name FROM roles ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        let entity = sqlx::query_as::<_, RoleEntity>("SELECT id, name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let entity = sqlx::query_as::<_, RoleEntity>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, role: &Role) -> Result<u64, RepositoryError> {
        let result = sqlx::query("INSERT INTO roles (id, name) VALUES ($1, $2)")
            .bind(role.id)
            .bind(&role.name)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    async fn assign_to_user(&self, user_id: Uuid, role_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }
}
