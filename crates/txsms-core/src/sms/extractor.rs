//! Transaction extractor running the field rules in sequence.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::transaction::TransactionRecord;

use super::rules::{
    amounts::AmountExtractor, balance::extract_balance, card::extract_card_number,
    datetime::{extract_date, extract_time},
    default_extractors, reference::extract_reference, FieldExtractor,
};
use super::Result;

/// Record plus supplementary details found in the same message.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted transaction.
    pub record: TransactionRecord,
    /// Available balance quoted in the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<Decimal>,
    /// Transaction reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Card digits, when the message names a card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Transaction date written in the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<NaiveDate>,
    /// Transaction time written in the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_time: Option<NaiveTime>,
    /// Number of currency-marked amounts in the message.
    pub amounts_found: usize,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

/// Extracts transaction records from message text.
///
/// Field extractors run in a fixed order and each one either sets its
/// field or leaves the default. A conversion failure in any of them
/// discards the whole record.
pub struct SmsExtractor {
    extractors: Vec<Box<dyn FieldExtractor>>,
    warn_on_multiple_amounts: bool,
}

impl SmsExtractor {
    /// Create an extractor with the standard rule sequence.
    pub fn new() -> Self {
        Self {
            extractors: default_extractors(),
            warn_on_multiple_amounts: true,
        }
    }

    /// Create an extractor with a custom rule sequence.
    pub fn with_extractors(extractors: Vec<Box<dyn FieldExtractor>>) -> Self {
        Self {
            extractors,
            warn_on_multiple_amounts: true,
        }
    }

    /// Set whether `analyze` warns about messages with several amounts.
    pub fn with_multiple_amount_warning(mut self, warn: bool) -> Self {
        self.warn_on_multiple_amounts = warn;
        self
    }

    /// Run every field extractor and merge the results into a record.
    pub fn extract(&self, text: &str) -> Result<TransactionRecord> {
        let mut record = TransactionRecord::default();

        for extractor in &self.extractors {
            match extractor.try_match(text, &record)? {
                Some(value) => value.apply(&mut record),
                None => debug!("No {} found", extractor.field().name()),
            }
        }

        debug!(
            "Extracted {} of {} via {}",
            record.direction(),
            record.amount,
            record.transaction_mode
        );

        Ok(record)
    }

    /// Extract the record together with the supplementary details and
    /// warnings. None of the details change the record itself.
    pub fn analyze(&self, text: &str) -> Result<ExtractionResult> {
        let record = self.extract(text)?;
        let amounts_found = AmountExtractor.count(text);

        let mut warnings = Vec::new();
        if self.warn_on_multiple_amounts && amounts_found > 1 {
            warnings.push(format!(
                "{} amounts found, using the first",
                amounts_found
            ));
        }
        warnings.extend(record.validate());

        Ok(ExtractionResult {
            available_balance: extract_balance(text),
            reference: extract_reference(text),
            card_number: extract_card_number(text),
            transaction_date: extract_date(text),
            transaction_time: extract_time(text),
            amounts_found,
            warnings,
            record,
        })
    }
}

impl Default for SmsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a record with the standard rules. `None` means the message
/// could not be extracted and should not be stored.
pub fn extract_transaction(text: &str) -> Option<TransactionRecord> {
    SmsExtractor::new().extract(text).ok()
}
