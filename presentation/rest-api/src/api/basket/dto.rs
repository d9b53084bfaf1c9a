use poem_openapi::Object;

use business::domain::basket::use_cases::get_user_basket::{BasketItemSnapshot, BasketSnapshot};

#[derive(Debug, Clone, Object)]
pub struct AddBasketItemRequest {
    /// Product identifier
    pub product_id: String,
    /// Units to add (must be positive)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct BasketItemResponse {
    /// Product identifier
    pub product_id: String,
    /// Product name at read time
    pub product_name: String,
    /// Current unit price as a decimal string
    pub product_price: String,
    /// Units in the basket
    pub quantity: i32,
}

impl From<BasketItemSnapshot> for BasketItemResponse {
    fn from(item: BasketItemSnapshot) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            product_price: item.product_price.to_string(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketResponse {
    /// Owning user identifier
    pub user_id: String,
    /// Basket total as a decimal string
    pub total_price: String,
    /// Basket lines
    pub items: Vec<BasketItemResponse>,
}

impl From<BasketSnapshot> for BasketResponse {
    fn from(snapshot: BasketSnapshot) -> Self {
        Self {
            user_id: snapshot.user_id.to_string(),
            total_price: snapshot.total_price.to_string(),
            items: snapshot.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TotalPriceResponse {
    /// Basket total as a decimal string; "0" when no basket exists
    pub total: String,
}
