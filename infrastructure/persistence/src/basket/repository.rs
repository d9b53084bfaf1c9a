use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::basket::model::Basket;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;

use super::entity::{BasketEntity, BasketItemRow};

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Basket>, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketEntity>(
            "SELECT id, user_id, total_price, created_at FROM baskets WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, BasketItemRow>(
            "SELECT product_id, quantity FROM basket_items WHERE basket_id = $1",
        )
        .bind(entity.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Some(entity.into_domain(rows)))
    }

    async fn create(&self, basket: &Basket) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO baskets (id, user_id, total_price, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(basket.id)
        .bind(basket.user_id)
        .bind(&basket.total_price)
        .bind(basket.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    // The whole aggregate is rewritten in one transaction: basket row first,
    // then the item set is replaced wholesale.
    async fn save(&self, basket: &Basket) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let result = sqlx::query("UPDATE baskets SET total_price = $2 WHERE id = $1")
            .bind(basket.id)
            .bind(&basket.total_price)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM basket_items WHERE basket_id = $1")
            .bind(basket.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for item in &basket.items {
            sqlx::query(
                "INSERT INTO basket_items (basket_id, product_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(basket.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
