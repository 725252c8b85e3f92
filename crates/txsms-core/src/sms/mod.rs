//! Transaction extraction from bank SMS text.

mod extractor;
pub mod rules;

pub use extractor::{extract_transaction, ExtractionResult, SmsExtractor};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
