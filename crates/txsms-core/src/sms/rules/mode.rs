//! Transaction channel detection.

use crate::models::transaction::{TransactionMode, TransactionRecord};
use crate::sms::Result;

use super::{Field, FieldExtractor, FieldValue};

/// Channel tokens in priority order. Matching is case-sensitive.
const MODE_TOKENS: [(&str, TransactionMode); 3] = [
    ("UPI", TransactionMode::Upi),
    ("NEFT", TransactionMode::Neft),
    ("IMPS", TransactionMode::Imps),
];

/// Transaction mode field extractor.
pub struct ModeExtractor;

impl FieldExtractor for ModeExtractor {
    fn field(&self) -> Field {
        Field::TransactionMode
    }

    fn try_match(&self, text: &str, _partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(Some(FieldValue::TransactionMode(detect_mode(text))))
    }
}

/// Detect the payment channel; the first token in priority order wins.
pub fn detect_mode(text: &str) -> TransactionMode {
    MODE_TOKENS
        .iter()
        .find(|(token, _)| text.contains(token))
        .map(|(_, mode)| *mode)
        .unwrap_or(TransactionMode::Other)
}
