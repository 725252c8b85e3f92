//! Storage interface for extracted transactions.
//!
//! The core never persists anything itself. Callers inject a sink and the
//! router hands it each record as a value.

use std::sync::Mutex;

use crate::error::{Result, TxSmsError};
use crate::models::transaction::{Direction, StoredTransaction};

/// Receives routed transactions, one bucket per direction.
///
/// Implementations must tolerate concurrent calls from several routers.
pub trait TransactionSink: Send + Sync {
    /// Store a transaction under a unique key within its bucket.
    fn store(&self, direction: Direction, key: &str, entry: &StoredTransaction) -> Result<()>;
}

/// A stored entry with its bucket and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEntry {
    pub direction: Direction,
    pub key: String,
    pub transaction: StoredTransaction,
}

/// In-memory sink, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<SinkEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored so far, in arrival order.
    pub fn entries(&self) -> Vec<SinkEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Entries stored in one bucket.
    pub fn bucket(&self, direction: Direction) -> Vec<SinkEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.direction == direction)
            .collect()
    }
}

impl TransactionSink for MemorySink {
    fn store(&self, direction: Direction, key: &str, entry: &StoredTransaction) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| TxSmsError::Storage("memory sink lock poisoned".to_string()))?;

        entries.push(SinkEntry {
            direction,
            key: key.to_string(),
            transaction: entry.clone(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionRecord;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_sink_buckets() {
        let sink = MemorySink::new();
        let entry = TransactionRecord::default().into_stored(1);

        sink.store(Direction::Debit, "debit_1", &entry).unwrap();
        sink.store(Direction::Credit, "credit_1", &entry).unwrap();
        sink.store(Direction::Debit, "debit_2", &entry).unwrap();

        assert_eq!(sink.entries().len(), 3);
        let debits: Vec<String> = sink
            .bucket(Direction::Debit)
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(debits, vec!["debit_1".to_string(), "debit_2".to_string()]);
    }

    #[test]
    fn test_memory_sink_concurrent_writes() {
        let sink = Arc::new(MemorySink::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    let entry = TransactionRecord::default().into_stored(i);
                    sink.store(Direction::Credit, &format!("credit_{i}"), &entry)
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.bucket(Direction::Credit).len(), 8);
    }
}
