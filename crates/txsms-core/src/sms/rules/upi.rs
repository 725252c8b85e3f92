//! UPI handle extraction.
//!
//! The pattern is the generic `local@domain` shape, so an e-mail address in
//! the message is reported as a UPI id too.

use crate::models::transaction::TransactionRecord;
use crate::sms::Result;

use super::patterns::UPI_ID_PATTERN;
use super::{ExtractionMatch, Field, FieldExtractor, FieldValue};

/// UPI id field extractor.
pub struct UpiIdExtractor;

impl UpiIdExtractor {
    pub fn find(&self, text: &str) -> Option<ExtractionMatch<String>> {
        UPI_ID_PATTERN.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str()).with_position(m.start(), m.end())
        })
    }
}

impl FieldExtractor for UpiIdExtractor {
    fn field(&self) -> Field {
        Field::UpiId
    }

    fn try_match(&self, text: &str, _partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(self.find(text).map(|m| FieldValue::UpiId(m.value)))
    }
}

/// Extract the first `local@domain` token.
pub fn extract_upi_id(text: &str) -> Option<String> {
    UpiIdExtractor.find(text).map(|m| m.value)
}
