//! Merchant name extraction.
//!
//! A name is only looked for when the message carries a UPI id. Without a
//! "to/from <name> via" phrase the UPI id itself is the merchant label.

use crate::models::transaction::{TransactionRecord, UNKNOWN_MERCHANT};
use crate::sms::Result;

use super::patterns::MERCHANT_PATTERN;
use super::{Field, FieldExtractor, FieldValue};

/// Merchant name field extractor. Reads the UPI id found earlier.
pub struct MerchantExtractor;

impl FieldExtractor for MerchantExtractor {
    fn field(&self) -> Field {
        Field::MerchantName
    }

    fn try_match(&self, text: &str, partial: &TransactionRecord) -> Result<Option<FieldValue>> {
        Ok(Some(FieldValue::MerchantName(extract_merchant_name(
            text,
            &partial.upi_id,
        ))))
    }
}

/// Resolve the merchant label given the UPI id found in the same text.
pub fn extract_merchant_name(text: &str, upi_id: &str) -> String {
    if upi_id.is_empty() {
        return UNKNOWN_MERCHANT.to_string();
    }

    match MERCHANT_PATTERN.captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => upi_id.to_string(),
    }
}
