use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, category: &Category) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO categories (id, name, created_at) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
