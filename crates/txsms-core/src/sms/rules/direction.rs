//! Debit/credit detection.

use crate::models::transaction::TransactionRecord;
use crate::sms::Result;

use super::{Field, FieldExtractor, FieldValue};

/// Words that mark money leaving the account. Anything else is a credit.
const DEBIT_KEYWORDS: [&str; 3] = ["debited", "spent", "paid"];

/// Direction field extractor.
pub struct DirectionExtractor;

impl FieldExtractor for DirectionExtractor {
    fn field(&self) -> Field {
        Field::Direction
    }

    fn try_match(&self, text: &str, _partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(Some(FieldValue::Debit(detect_direction(text))))
    }
}

/// Return true when the message describes a debit.
pub fn detect_direction(text: &str) -> bool {
    let lower = text.to_lowercase();
    DEBIT_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_keywords() {
        assert!(detect_direction("Rs.500 DEBITED from A/c"));
        assert!(detect_direction("You spent Rs 20"));
        assert!(detect_direction("Paid Rs 100 to shop"));
        assert!(detect_direction("bill prepaid"));
    }

    #[test]
    fn test_defaults_to_credit() {
        assert!(!detect_direction("INR 50 credited"));
        assert!(!detect_direction("your balance is low"));
        assert!(!detect_direction(""));
    }
}
