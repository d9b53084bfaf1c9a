use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Public view of a product. Prices travel as decimal strings so no
/// precision is lost on the wire.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Owning seller identifier
    pub seller_id: String,
    /// Category identifier
    pub category_id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Average rating, absent until the product has been rated
    #[oai(skip_serializing_if_is_none)]
    pub average_rating: Option<String>,
    /// Stored image paths
    pub image_paths: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            seller_id: product.user_id.to_string(),
            category_id: product.category_id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            average_rating: product.average_rating.map(|r| r.to_string()),
            image_paths: product.image_paths,
            created_at: product.created_at,
        }
    }
}
