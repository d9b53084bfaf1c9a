use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Catalog product owned by a seller.
///
/// `average_rating` is a derived cache over all rating rows for the product,
/// recomputed whenever a rating is added.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub average_rating: Option<BigDecimal>,
    pub image_paths: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_paths: Vec<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < BigDecimal::from(0) {
            return Err(ProductError::PriceNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            category_id: props.category_id,
            name: props.name,
            description: props.description,
            price: props.price,
            average_rating: None,
            image_paths: props.image_paths,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        category_id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        average_rating: Option<BigDecimal>,
        image_paths: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            category_id,
            name,
            description,
            price,
            average_rating,
            image_paths,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn props(name: &str, price: &str) -> NewProductProps {
        NewProductProps {
            user_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            name: name.to_string(),
            description: "A product".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            image_paths: vec![],
        }
    }

    #[test]
    fn should_create_product_when_valid() {
        let result = Product::new(props("Mechanical Keyboard", "59.90"));

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Mechanical Keyboard");
        assert!(product.average_rating.is_none());
    }

    #[test]
    fn should_reject_product_when_name_is_empty() {
        let result = Product::new(props("   ", "10.00"));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_product_when_price_is_negative() {
        let result = Product::new(props("Keyboard", "-1.00"));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[test]
    fn should_allow_free_product() {
        let result = Product::new(props("Sticker Pack", "0"));

        assert!(result.is_ok());
    }
}
