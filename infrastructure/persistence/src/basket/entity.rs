use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::basket::model::{Basket, BasketItem};

#[derive(Debug, FromRow)]
pub struct BasketEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct BasketItemRow {
    pub product_id: Uuid,
    pub quantity: i32,
}

impl BasketEntity {
    pub fn into_domain(self, rows: Vec<BasketItemRow>) -> Basket {
        let items = rows
            .into_iter()
            .map(|row| BasketItem {
                product_id: row.product_id,
                quantity: row.quantity,
            })
            .collect();

        Basket::from_repository(self.id, self.user_id, self.created_at, self.total_price, items)
    }
}
