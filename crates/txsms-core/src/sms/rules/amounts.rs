//! Amount extraction for bank messages.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ExtractionError;
use crate::models::transaction::TransactionRecord;
use crate::sms::Result;

use super::patterns::AMOUNT_PATTERN;
use super::{Field, FieldExtractor, FieldValue};

/// Amount field extractor.
///
/// Only the first currency-marked amount is used. Messages that also quote
/// a balance usually state the transaction amount first.
pub struct AmountExtractor;

impl AmountExtractor {
    /// Number of currency-marked amounts, without parsing them.
    pub fn count(&self, text: &str) -> usize {
        AMOUNT_PATTERN.find_iter(text).count()
    }
}

impl FieldExtractor for AmountExtractor {
    fn field(&self) -> Field {
        Field::Amount
    }

    fn try_match(&self, text: &str, _partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(extract_amount(text)?.map(FieldValue::Amount))
    }
}

/// Extract the first currency-marked amount from text.
pub fn extract_amount(text: &str) -> Result<Option<Decimal>> {
    match AMOUNT_PATTERN.captures(text) {
        Some(caps) => parse_amount(&caps[1]).map(Some),
        None => Ok(None),
    }
}

/// Parse an amount written with comma thousands separators (e.g. "1,250.50").
///
/// Amounts are held as `Decimal`, so a well-formed literal larger than
/// `Decimal::MAX` (about 7.9e28) is rejected like malformed text and the
/// message yields no record.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(',', "");
    Decimal::from_str(&cleaned).map_err(|_| ExtractionError::parse(Field::Amount.name(), s))
}
