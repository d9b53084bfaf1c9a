use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::rating::model::Rating;
use business::domain::rating::repository::RatingRepository;

pub struct RatingRepositoryPostgres {
    pool: PgPool,
}

impl RatingRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    // Insert and average refresh share one transaction so the cached
    // average on the product row never drifts from the rating rows.
    async fn add(&self, rating: &Rating) -> Result<BigDecimal, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            "INSERT INTO ratings (id, user_id, product_id, value) VALUES ($1, $2, $3, $4)",
        )
        .bind(rating.id)
        .bind(rating.user_id)
        .bind(rating.product_id)
        .bind(rating.value)
        .execute(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let average = sqlx::query_scalar::<_, BigDecimal>(
            "SELECT ROUND(AVG(value), 2) FROM ratings WHERE product_id = $1",
        )
        .bind(rating.product_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("UPDATE products SET average_rating = $2 WHERE id = $1")
            .bind(rating.product_id)
            .bind(&average)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(average)
    }

    async fn average_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Option<BigDecimal>, RepositoryError> {
        let average = sqlx::query_scalar::<_, Option<BigDecimal>>(
            "SELECT ROUND(AVG(value), 2) FROM ratings WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(average)
    }
}
