use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Line item inside a basket. At most one item exists per product; adding
/// the same product again merges quantities instead of duplicating rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Per-user shopping basket, created lazily on the first add.
///
/// `total_price` is a derived cache; after every mutation it is re-derived
/// from scratch as the sum of `quantity * current product price` over all
/// items, never adjusted incrementally.
#[derive(Debug, Clone)]
pub struct Basket {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub total_price: BigDecimal,
    pub items: Vec<BasketItem>,
}

impl Basket {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            total_price: BigDecimal::from(0),
            items: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        total_price: BigDecimal,
        items: Vec<BasketItem>,
    ) -> Self {
        Self {
            id,
            user_id,
            created_at,
            total_price,
            items,
        }
    }

    /// Merges `quantity` into an existing item for the product, or appends a
    /// new item when none exists.
    pub fn add_product(&mut self, product_id: Uuid, quantity: i32) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(BasketItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Removes every item row matching the product id (defensive against
    /// duplicates that should not exist). Returns how many rows were removed.
    pub fn remove_product(&mut self, product_id: Uuid) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        before - self.items.len()
    }

    /// Decrements the item's quantity by one, dropping the item entirely when
    /// it reaches zero. Returns false when no item matches the product.
    pub fn remove_one_quantity(&mut self, product_id: Uuid) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) else {
            return false;
        };

        item.quantity -= 1;
        if item.quantity <= 0 {
            self.items.retain(|i| i.product_id != product_id);
        }
        true
    }

    /// Empties the basket after a successful checkout. The basket row itself
    /// survives; only its items and total are reset.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_price = BigDecimal::from(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_merge_quantities_for_same_product() {
        let mut basket = Basket::new(Uuid::new_v4());
        let product_id = Uuid::new_v4();

        basket.add_product(product_id, 2);
        basket.add_product(product_id, 3);

        assert_eq!(basket.items.len(), 1);
        assert_eq!(basket.items[0].quantity, 5);
    }

    #[test]
    fn should_append_new_item_for_different_product() {
        let mut basket = Basket::new(Uuid::new_v4());

        basket.add_product(Uuid::new_v4(), 1);
        basket.add_product(Uuid::new_v4(), 1);

        assert_eq!(basket.items.len(), 2);
    }

    #[test]
    fn should_remove_all_rows_for_product() {
        let mut basket = Basket::new(Uuid::new_v4());
        let product_id = Uuid::new_v4();
        basket.add_product(product_id, 4);
        basket.add_product(Uuid::new_v4(), 1);

        let removed = basket.remove_product(product_id);

        assert_eq!(removed, 1);
        assert_eq!(basket.items.len(), 1);
    }

    #[test]
    fn should_report_zero_removed_when_product_absent() {
        let mut basket = Basket::new(Uuid::new_v4());
        basket.add_product(Uuid::new_v4(), 1);

        assert_eq!(basket.remove_product(Uuid::new_v4()), 0);
    }

    #[test]
    fn should_drop_item_when_quantity_reaches_zero() {
        let mut basket = Basket::new(Uuid::new_v4());
        let product_id = Uuid::new_v4();
        basket.add_product(product_id, 2);

        assert!(basket.remove_one_quantity(product_id));
        assert_eq!(basket.items[0].quantity, 1);
        assert!(basket.remove_one_quantity(product_id));
        assert!(basket.items.is_empty());
    }

    #[test]
    fn should_reject_decrement_when_item_absent() {
        let mut basket = Basket::new(Uuid::new_v4());

        assert!(!basket.remove_one_quantity(Uuid::new_v4()));
    }

    #[test]
    fn should_reset_items_and_total_on_clear() {
        let mut basket = Basket::new(Uuid::new_v4());
        basket.add_product(Uuid::new_v4(), 3);
        basket.total_price = BigDecimal::from(30);

        basket.clear();

        assert!(basket.items.is_empty());
        assert_eq!(basket.total_price, BigDecimal::from(0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn repeated_adds_merge_into_a_single_item(quantities in proptest::collection::vec(1..100i32, 1..20)) {
                let mut basket = Basket::new(Uuid::new_v4());
                let product_id = Uuid::new_v4();

                for q in &quantities {
                    basket.add_product(product_id, *q);
                }

                prop_assert_eq!(basket.items.len(), 1);
                prop_assert_eq!(basket.items[0].quantity, quantities.iter().sum::<i32>());
            }

            #[test]
            fn decrementing_quantity_times_empties_the_item(quantity in 1..50i32) {
                let mut basket = Basket::new(Uuid::new_v4());
                let product_id = Uuid::new_v4();
                basket.add_product(product_id, quantity);

                for _ in 0..quantity {
                    prop_assert!(basket.remove_one_quantity(product_id));
                }

                prop_assert!(basket.items.is_empty());
                prop_assert!(!basket.remove_one_quantity(product_id));
            }
        }
    }
}
