use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Saved-for-later reference to a product; no quantity semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub product_id: Uuid,
}

/// Per-user wishlist, created lazily. A product id appears at most once;
/// adding a duplicate is an error, not a merge.
#[derive(Debug, Clone)]
pub struct Wishlist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        items: Vec<WishlistItem>,
    ) -> Self {
        Self {
            id,
            user_id,
            created_at,
            items,
        }
    }

    pub fn contains(&self, product_id: Uuid) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Appends the product; the caller must have checked `contains` first.
    pub fn add_product(&mut self, product_id: Uuid) {
        self.items.push(WishlistItem { product_id });
    }

    /// Removes the product, returning false when it was not present.
    pub fn remove_product(&mut self, product_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < before
    }
}
