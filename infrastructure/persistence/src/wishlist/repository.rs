use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::{WishlistEntity, WishlistItemRow};

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Wishlist>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, user_id, created_at FROM wishlists WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, WishlistItemRow>(
            "SELECT product_id FROM wishlist_items WHERE wishlist_id = $1",
        )
        .bind(entity.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Some(entity.into_domain(rows)))
    }

    async fn create(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO wishlists (id, user_id, created_at) VALUES ($1, $2, $3)")
            .bind(wishlist.id)
            .bind(wishlist.user_id)
            .bind(wishlist.created_at)
            .execute(&self.pool)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::Duplicated
                }
                _ => RepositoryError::DatabaseError,
            })?;

        Ok(())
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        // UPDATE doubles as the existence check; a vanished wishlist
        // reports zero rows to the caller.
        let result = sqlx::query("UPDATE wishlists SET user_id = user_id WHERE id = $1")
            .bind(wishlist.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM wishlist_items WHERE wishlist_id = $1")
            .bind(wishlist.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for item in &wishlist.items {
            sqlx::query("INSERT INTO wishlist_items (wishlist_id, product_id) VALUES ($1, $2)")
                .bind(wishlist.id)
                .bind(item.product_id)
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
