use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, ProductImageRow};

const PRODUCT_COLUMNS: &str =
    "id, user_id, category_id, name, description, price, average_rating, created_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads image paths for a set of products and zips them into the
    /// domain models.
    async fn hydrate(&self, entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
        if entities.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let rows = sqlx::query_as::<_, ProductImageRow>(
            "SELECT product_id, path FROM product_images WHERE product_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut paths: HashMap<Uuid, Vec<String>> = HashMap::new();
        for row in rows {
            paths.entry(row.product_id).or_default().push(row.path);
        }

        Ok(entities
            .into_iter()
            .map(|e| {
                let images = paths.remove(&e.id).unwrap_or_default();
                e.into_domain(images)
            })
            .collect())
    }

    async fn hydrate_one(
        &self,
        entity: Option<ProductEntity>,
    ) -> Result<Option<Product>, RepositoryError> {
        match entity {
            Some(entity) => Ok(self.hydrate(vec![entity]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate_one(entity).await
    }

    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY created_at DESC",
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE user_id = $1 ORDER BY created_at DESC",
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn get_by_user_and_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE user_id = $1 AND id = $2",
        ))
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate_one(entity).await
    }

    async fn get_by_rating_descending(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY average_rating DESC NULLS LAST, created_at DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn get_top_rated(&self, count: i64) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE average_rating IS NOT NULL ORDER BY average_rating DESC LIMIT $1",
        ))
        .bind(count)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn save(&self, product: &Product) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let result = sqlx::query(
            r#"INSERT INTO products (id, user_id, category_id, name, description, price, average_rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                category_id = EXCLUDED.category_id,
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                average_rating = EXCLUDED.average_rating"#,
        )
        .bind(product.id)
        .bind(product.user_id)
        .bind(product.category_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.average_rating)
        .bind(product.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for path in &product.image_paths {
            sqlx::query("INSERT INTO product_images (id, product_id, path) VALUES ($1, $2, $3)")
                .bind(Uuid::new_v4())
                .bind(product.id)
                .bind(path)
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
