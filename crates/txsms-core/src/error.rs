//! Error types for the txsms-core library.

use thiserror::Error;

/// Main error type for the txsms library.
#[derive(Error, Debug)]
pub enum TxSmsError {
    /// Transaction extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// The storage collaborator rejected a record.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to transaction field extraction.
///
/// A missing field is never an error: it leaves the record default in place.
/// Only a value that matched a pattern but could not be converted aborts
/// the extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Failed to parse a matched value.
    #[error("failed to parse {field}: {value:?}")]
    Parse { field: String, value: String },
}

impl ExtractionError {
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for the txsms library.
pub type Result<T> = std::result::Result<T, TxSmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ExtractionError::parse("amount", ",");
        assert_eq!(err.to_string(), "failed to parse amount: \",\"");

        let err: TxSmsError = err.into();
        assert!(err.to_string().starts_with("extraction error:"));
    }
}
