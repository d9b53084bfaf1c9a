use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::wishlist::model::{Wishlist, WishlistItem};

#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct WishlistItemRow {
    pub product_id: Uuid,
}

impl WishlistEntity {
    pub fn into_domain(self, rows: Vec<WishlistItemRow>) -> Wishlist {
        let items = rows
            .into_iter()
            .map(|row| WishlistItem {
                product_id: row.product_id,
            })
            .collect();

        Wishlist::from_repository(self.id, self.user_id, self.created_at, items)
    }
}
