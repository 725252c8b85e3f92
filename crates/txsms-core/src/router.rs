//! Routes inbound messages through classification and extraction into a sink.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::classifier::FinancialClassifier;
use crate::error::Result;
use crate::models::config::TxSmsConfig;
use crate::models::message::InboundMessage;
use crate::models::transaction::Direction;
use crate::sink::TransactionSink;
use crate::sms::SmsExtractor;

/// What happened to a routed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The classifier found no financial keyword.
    NotFinancial,
    /// Extraction failed or the record was rejected; nothing was stored.
    Dropped { reason: String },
    /// The record was handed to the sink.
    Stored { direction: Direction, key: String },
}

/// Classifies, extracts and stores messages.
///
/// The capture timestamp and storage key are assigned here, never by the
/// extractor. Keys are `<bucket>_<millis>` and stay unique for the lifetime
/// of the router even when messages arrive within the same millisecond.
pub struct MessageRouter {
    classifier: FinancialClassifier,
    extractor: SmsExtractor,
    sink: Arc<dyn TransactionSink>,
    require_complete: bool,
    last_timestamp: AtomicI64,
}

impl MessageRouter {
    /// Create a router with the standard classifier and extractor.
    pub fn new(sink: Arc<dyn TransactionSink>) -> Self {
        Self {
            classifier: FinancialClassifier::new(),
            extractor: SmsExtractor::new(),
            sink,
            require_complete: false,
            last_timestamp: AtomicI64::new(i64::MIN),
        }
    }

    /// Create a router configured from `config`.
    pub fn from_config(config: &TxSmsConfig, sink: Arc<dyn TransactionSink>) -> Self {
        Self {
            classifier: FinancialClassifier::new()
                .with_extra_keywords(&config.classifier.extra_keywords),
            extractor: SmsExtractor::new()
                .with_multiple_amount_warning(config.extraction.warn_on_multiple_amounts),
            ..Self::new(sink)
        }
        .with_require_complete(config.extraction.require_complete)
    }

    /// Drop records that fail validation instead of storing them.
    pub fn with_require_complete(mut self, require: bool) -> Self {
        self.require_complete = require;
        self
    }

    /// Route one message. Sink failures are returned as errors; everything
    /// else is reported through the outcome.
    pub fn route(
        &self,
        message: &InboundMessage,
        captured_at: DateTime<Utc>,
    ) -> Result<RouteOutcome> {
        let sender = message.sender.as_deref().unwrap_or("unknown sender");

        let Some(keyword) = self.classifier.matched_keyword(&message.body) else {
            debug!("Message from {} is not financial", sender);
            return Ok(RouteOutcome::NotFinancial);
        };
        debug!("Message from {} matched keyword {:?}", sender, keyword);

        let record = match self.extractor.extract(&message.body) {
            Ok(record) => record,
            Err(e) => {
                warn!("Dropping message from {}: {}", sender, e);
                return Ok(RouteOutcome::Dropped {
                    reason: e.to_string(),
                });
            }
        };

        if self.require_complete {
            let issues = record.validate();
            if !issues.is_empty() {
                let reason = issues.join("; ");
                warn!("Dropping incomplete record from {}: {}", sender, reason);
                return Ok(RouteOutcome::Dropped { reason });
            }
        }

        let direction = record.direction();
        let timestamp = self.next_timestamp(captured_at.timestamp_millis());
        let key = format!("{}_{}", direction.bucket(), timestamp);

        self.sink.store(direction, &key, &record.into_stored(timestamp))?;
        info!("Stored {} transaction {}", direction, key);

        Ok(RouteOutcome::Stored { direction, key })
    }

    fn next_timestamp(&self, millis: i64) -> i64 {
        let mut assigned = millis;
        let _ = self
            .last_timestamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                assigned = if millis > last { millis } else { last + 1 };
                Some(assigned)
            });
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TxSmsError;
    use crate::models::transaction::{StoredTransaction, TransactionMode};
    use crate::sink::MemorySink;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn memory_router() -> (Arc<MemorySink>, MessageRouter) {
        let sink = Arc::new(MemorySink::new());
        let router = MessageRouter::new(sink.clone());
        (sink, router)
    }

    #[test]
    fn test_stores_debit() {
        let (sink, router) = memory_router();
        let message = InboundMessage::new(
            "Rs.500 debited from A/c XX1234 via UPI to merchant@bank using UPI",
        )
        .with_sender("AX-HDFCBK");

        let outcome = router.route(&message, at(1_700_000_000_000)).unwrap();
        assert_eq!(
            outcome,
            RouteOutcome::Stored {
                direction: Direction::Debit,
                key: "debit_1700000000000".to_string(),
            }
        );

        let entries = sink.bucket(Direction::Debit);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].transaction,
            StoredTransaction {
                account_number: "XX1234".to_string(),
                merchant_name: "merchant@bank".to_string(),
                amount: Decimal::from(500),
                transaction_mode: TransactionMode::Upi,
                upi_id: "merchant@bank".to_string(),
                timestamp: 1_700_000_000_000,
            }
        );
    }

    #[test]
    fn test_not_financial_is_skipped() {
        let (sink, router) = memory_router();
        let outcome = router.route(&"See you at 7".into(), at(1)).unwrap();
        assert_eq!(outcome, RouteOutcome::NotFinancial);
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_parse_failure_is_dropped() {
        let (sink, router) = memory_router();
        let outcome = router
            .route(&"Thanks, yours, payment received".into(), at(1))
            .unwrap();
        assert!(matches!(outcome, RouteOutcome::Dropped { .. }));
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_incomplete_records() {
        let (sink, router) = memory_router();
        let outcome = router.route(&"your balance is low".into(), at(5)).unwrap();
        assert_eq!(
            outcome,
            RouteOutcome::Stored {
                direction: Direction::Credit,
                key: "credit_5".to_string(),
            }
        );
        assert_eq!(sink.entries().len(), 1);

        let (sink, router) = memory_router();
        let router = router.with_require_complete(true);
        let outcome = router.route(&"your balance is low".into(), at(5)).unwrap();
        assert!(matches!(outcome, RouteOutcome::Dropped { .. }));
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_keys_unique_within_millisecond() {
        let (sink, router) = memory_router();
        let text = "INR 1,250.50 credited to your account via NEFT";

        router.route(&text.into(), at(10)).unwrap();
        router.route(&text.into(), at(10)).unwrap();
        router.route(&text.into(), at(9)).unwrap();

        let keys: Vec<String> = sink.entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["credit_10", "credit_11", "credit_12"]);
    }

    #[test]
    fn test_extra_keywords_from_config() {
        let sink = Arc::new(MemorySink::new());
        let mut config = TxSmsConfig::default();
        config.classifier.extra_keywords.push("refund".to_string());
        let router = MessageRouter::from_config(&config, sink.clone());

        let outcome = router.route(&"Refund of Rs 99 processed".into(), at(1)).unwrap();
        assert!(matches!(outcome, RouteOutcome::Stored { .. }));
    }

    struct FailingSink;

    impl TransactionSink for FailingSink {
        fn store(&self, _: Direction, _: &str, _: &StoredTransaction) -> Result<()> {
            Err(TxSmsError::Storage("offline".to_string()))
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let router = MessageRouter::new(Arc::new(FailingSink));
        let err = router
            .route(&"INR 10 credited".into(), at(1))
            .unwrap_err();
        assert!(matches!(err, TxSmsError::Storage(_)));
    }
}
