use poem_openapi::Object;

use business::domain::wishlist::use_cases::get_user_wishlist::{
    WishlistItemSnapshot, WishlistSnapshot,
};

#[derive(Debug, Clone, Object)]
pub struct AddWishlistItemRequest {
    /// Product identifier
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct WishlistItemResponse {
    /// Product identifier
    pub product_id: String,
    /// Product name at read time
    pub product_name: String,
    /// Current unit price as a decimal string
    pub product_price: String,
}

impl From<WishlistItemSnapshot> for WishlistItemResponse {
    fn from(item: WishlistItemSnapshot) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            product_price: item.product_price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// Owning user identifier
    pub user_id: String,
    /// Wishlist entries
    pub items: Vec<WishlistItemResponse>,
}

impl From<WishlistSnapshot> for WishlistResponse {
    fn from(snapshot: WishlistSnapshot) -> Self {
        Self {
            user_id: snapshot.user_id.to_string(),
            items: snapshot.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
