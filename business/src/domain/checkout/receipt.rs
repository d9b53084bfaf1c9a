use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// Ephemeral checkout result. No order record is persisted; the receipt text
/// is handed back to the caller and forgotten.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub amount: BigDecimal,
    pub receipt: String,
}

/// Renders the plain-text receipt embedding the buyer's username, the payment
/// timestamp, and the paid amount.
pub fn generate_receipt(username: &str, amount: &BigDecimal, paid_at: DateTime<Utc>) -> String {
    let mut receipt = String::new();

    receipt.push_str("*********************************\n");
    receipt.push_str("          PAYMENT RECEIPT        \n");
    receipt.push_str("*********************************\n");
    receipt.push_str(&format!("User: {username}\n"));
    receipt.push_str(&format!("Date: {}\n", paid_at.format("%Y-%m-%d %H:%M:%S")));
    receipt.push_str(&format!("Amount Paid: {amount}\n"));
    receipt.push_str("*********************************\n");
    receipt.push_str("     Thank you for shopping!     \n");
    receipt.push_str("*********************************\n");

    receipt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_embed_username_date_and_amount() {
        let amount = BigDecimal::from_str("40.00").unwrap();
        let paid_at = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let receipt = generate_receipt("alice", &amount, paid_at);

        assert!(receipt.contains("User: alice"));
        assert!(receipt.contains("Date: 2024-05-01 12:30:00"));
        assert!(receipt.contains("Amount Paid: 40.00"));
    }
}
