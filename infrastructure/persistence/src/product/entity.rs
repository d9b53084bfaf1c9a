use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub average_rating: Option<BigDecimal>,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self, image_paths: Vec<String>) -> Product {
        Product::from_repository(
            self.id,
            self.user_id,
            self.category_id,
            self.name,
            self.description,
            self.price,
            self.average_rating,
            image_paths,
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ProductImageRow {
    pub product_id: Uuid,
    pub path: String,
}
