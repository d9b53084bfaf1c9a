use uuid::Uuid;

use super::errors::RatingError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// One rating submission. Repeated submissions by the same user accumulate
/// as separate rows; the product's average is the mean over all of them.
#[derive(Debug, Clone)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub value: i32,
}

impl Rating {
    pub fn new(user_id: Uuid, product_id: Uuid, value: i32) -> Result<Self, RatingError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(RatingError::ValueOutOfRange);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_values_within_range() {
        for value in MIN_RATING..=MAX_RATING {
            assert!(Rating::new(Uuid::new_v4(), Uuid::new_v4(), value).is_ok());
        }
    }

    #[test]
    fn should_reject_value_below_range() {
        let result = Rating::new(Uuid::new_v4(), Uuid::new_v4(), 0);

        assert!(matches!(result.unwrap_err(), RatingError::ValueOutOfRange));
    }

    #[test]
    fn should_reject_value_above_range() {
        let result = Rating::new(Uuid::new_v4(), Uuid::new_v4(), 6);

        assert!(matches!(result.unwrap_err(), RatingError::ValueOutOfRange));
    }
}
