//! Transaction data extracted from bank SMS messages.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Merchant label used when no counterparty can be identified.
pub const UNKNOWN_MERCHANT: &str = "Unknown";

/// Structured fields extracted from one financial message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Money left the account.
    pub is_debit: bool,

    /// Amount as written in the message, without currency.
    pub amount: Decimal,

    /// Masked (`XX1234`) or full account number, verbatim.
    pub account_number: String,

    /// Best-effort counterparty label.
    pub merchant_name: String,

    /// Payment channel.
    pub transaction_mode: TransactionMode,

    /// `local@domain` handle, if present.
    pub upi_id: String,
}

impl Default for TransactionRecord {
    fn default() -> Self {
        Self {
            is_debit: false,
            amount: Decimal::ZERO,
            account_number: String::new(),
            merchant_name: UNKNOWN_MERCHANT.to_string(),
            transaction_mode: TransactionMode::Other,
            upi_id: String::new(),
        }
    }
}

impl TransactionRecord {
    /// Storage bucket this record belongs to.
    pub fn direction(&self) -> Direction {
        Direction::from_debit(self.is_debit)
    }

    /// Check the record for missing data and return a list of issues.
    ///
    /// A record with issues is still a valid extraction; callers decide
    /// whether to keep it.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.amount.is_zero() {
            issues.push("amount is zero".to_string());
        }

        if self.account_number.is_empty() && self.upi_id.is_empty() {
            issues.push("neither account number nor UPI id found".to_string());
        }

        issues
    }

    /// Attach a capture timestamp for handing off to storage.
    pub fn into_stored(self, timestamp: i64) -> StoredTransaction {
        StoredTransaction {
            account_number: self.account_number,
            merchant_name: self.merchant_name,
            amount: self.amount,
            transaction_mode: self.transaction_mode,
            upi_id: self.upi_id,
            timestamp,
        }
    }
}

/// Payment channel named in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionMode {
    /// Unified Payments Interface.
    Upi,
    /// National Electronic Funds Transfer.
    Neft,
    /// Immediate Payment Service.
    Imps,
    /// Anything else, or no channel mentioned.
    Other,
}

impl Default for TransactionMode {
    fn default() -> Self {
        Self::Other
    }
}

impl TransactionMode {
    /// Channel token as it appears in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Neft => "NEFT",
            Self::Imps => "IMPS",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way money moved; also the storage bucket name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    pub fn from_debit(is_debit: bool) -> Self {
        if is_debit {
            Self::Debit
        } else {
            Self::Credit
        }
    }

    /// Bucket name used for storage keys.
    pub fn bucket(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bucket())
    }
}

/// A record as handed to storage, with the caller's capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTransaction {
    pub account_number: String,
    pub merchant_name: String,
    /// Written as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub transaction_mode: TransactionMode,
    pub upi_id: String,
    /// Capture time in epoch milliseconds.
    pub timestamp: i64,
}
