//! Core library for bank SMS transaction tracking.
//!
//! This crate provides:
//! - Keyword classification of financial messages
//! - Rule-based transaction extraction (direction, amount, account, UPI id,
//!   channel, merchant)
//! - A storage interface and a router that ties the pieces together

pub mod classifier;
pub mod error;
pub mod models;
pub mod router;
pub mod sink;
pub mod sms;

pub use classifier::{is_financial, FinancialClassifier};
pub use error::{ExtractionError, Result, TxSmsError};
pub use models::config::TxSmsConfig;
pub use models::message::InboundMessage;
pub use models::transaction::{Direction, StoredTransaction, TransactionMode, TransactionRecord};
pub use router::{MessageRouter, RouteOutcome};
pub use sink::{MemorySink, TransactionSink};
pub use sms::{extract_transaction, ExtractionResult, SmsExtractor};
