//! Account number extraction.

use crate::models::transaction::TransactionRecord;
use crate::sms::Result;

use super::patterns::ACCOUNT_PATTERN;
use super::{ExtractionMatch, Field, FieldExtractor, FieldValue};

/// Account number field extractor.
pub struct AccountExtractor;

impl AccountExtractor {
    pub fn find(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = ACCOUNT_PATTERN.captures(text)?;
        let number = caps.get(1)?;
        Some(
            ExtractionMatch::new(number.as_str().to_string(), number.as_str())
                .with_position(number.start(), number.end()),
        )
    }
}

impl FieldExtractor for AccountExtractor {
    fn field(&self) -> Field {
        Field::AccountNumber
    }

    fn try_match(&self, text: &str, _partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(self.find(text).map(|m| FieldValue::AccountNumber(m.value)))
    }
}

/// Extract the first labelled account number, masked or plain.
pub fn extract_account_number(text: &str) -> Option<String> {
    AccountExtractor.find(text).map(|m| m.value)
}
