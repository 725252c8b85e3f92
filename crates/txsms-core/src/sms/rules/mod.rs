//! Rule-based field extractors for bank SMS messages.

pub mod account;
pub mod amounts;
pub mod balance;
pub mod card;
pub mod datetime;
pub mod direction;
pub mod merchant;
pub mod mode;
pub mod patterns;
pub mod reference;
pub mod upi;

pub use account::{extract_account_number, AccountExtractor};
pub use amounts::{extract_amount, parse_amount, AmountExtractor};
pub use balance::extract_balance;
pub use card::extract_card_number;
pub use datetime::{extract_date, extract_time};
pub use direction::{detect_direction, DirectionExtractor};
pub use merchant::{extract_merchant_name, MerchantExtractor};
pub use mode::{detect_mode, ModeExtractor};
pub use patterns::*;
pub use reference::extract_reference;
pub use upi::{extract_upi_id, UpiIdExtractor};

use rust_decimal::Decimal;

use crate::models::transaction::{TransactionMode, TransactionRecord};

use super::Result;

/// Record field populated by an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Direction,
    Amount,
    AccountNumber,
    UpiId,
    TransactionMode,
    MerchantName,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::Amount => "amount",
            Self::AccountNumber => "account number",
            Self::UpiId => "UPI id",
            Self::TransactionMode => "transaction mode",
            Self::MerchantName => "merchant name",
        }
    }
}

/// A typed value produced by a field extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Debit(bool),
    Amount(Decimal),
    AccountNumber(String),
    UpiId(String),
    TransactionMode(TransactionMode),
    MerchantName(String),
}

impl FieldValue {
    /// Write this value into the matching record field.
    pub fn apply(self, record: &mut TransactionRecord) {
        match self {
            Self::Debit(is_debit) => record.is_debit = is_debit,
            Self::Amount(amount) => record.amount = amount,
            Self::AccountNumber(account) => record.account_number = account,
            Self::UpiId(upi_id) => record.upi_id = upi_id,
            Self::TransactionMode(mode) => record.transaction_mode = mode,
            Self::MerchantName(name) => record.merchant_name = name,
        }
    }
}

/// Trait for field extractors.
///
/// Extractors run in a fixed order; `partial` holds whatever the earlier
/// extractors produced. `Ok(None)` means the pattern was absent and the
/// field keeps its default. `Err` means a match could not be converted and
/// aborts the whole message.
pub trait FieldExtractor: Send + Sync {
    /// The field this extractor populates.
    fn field(&self) -> Field;

    /// Try to extract the field from text.
    fn try_match(&self, text: &str, partial: &TransactionRecord) -> Result<Option<FieldValue>>;
}

/// A pattern match with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// The standard extractor sequence.
pub fn default_extractors() -> Vec<Box<dyn FieldExtractor>> {
    vec![
        Box::new(DirectionExtractor),
        Box::new(AmountExtractor),
        Box::new(AccountExtractor),
        Box::new(UpiIdExtractor),
        Box::new(ModeExtractor),
        Box::new(MerchantExtractor),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let fields: Vec<Field> = default_extractors().iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![
                Field::Direction,
                Field::Amount,
                Field::AccountNumber,
                Field::UpiId,
                Field::TransactionMode,
                Field::MerchantName,
            ]
        );
    }

    #[test]
    fn test_apply_field_value() {
        let mut record = TransactionRecord::default();
        FieldValue::UpiId("a@b".to_string()).apply(&mut record);
        FieldValue::Debit(true).apply(&mut record);
        assert_eq!(record.upi_id, "a@b");
        assert!(record.is_debit);
    }
}
