//! JSON-lines record store, one file per direction.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use txsms_core::{Direction, Result, StoredTransaction, TransactionSink, TxSmsError};

/// One line in a bucket file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLine {
    pub key: String,
    #[serde(flatten)]
    pub transaction: StoredTransaction,
}

/// Appends records to `<dir>/debit.jsonl` and `<dir>/credit.jsonl`.
pub struct JsonlSink {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlSink {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn bucket_path(&self, direction: Direction) -> PathBuf {
        self.dir.join(format!("{}.jsonl", direction.bucket()))
    }

    /// Read back every line in a bucket.
    pub fn read_bucket(&self, direction: Direction) -> Result<Vec<StoredLine>> {
        read_lines(&self.bucket_path(direction))
    }
}

impl TransactionSink for JsonlSink {
    fn store(&self, direction: Direction, key: &str, entry: &StoredTransaction) -> Result<()> {
        let line = serde_json::to_string(&StoredLine {
            key: key.to_string(),
            transaction: entry.clone(),
        })
        .map_err(|e| TxSmsError::Storage(e.to_string()))?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| TxSmsError::Storage("store lock poisoned".to_string()))?;

        let path = self.bucket_path(direction);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", line)?;

        debug!("Appended {} to {}", key, path.display());
        Ok(())
    }
}

fn read_lines(path: &Path) -> Result<Vec<StoredLine>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = serde_json::from_str(&line)
            .map_err(|e| TxSmsError::Storage(format!("{}: {}", path.display(), e)))?;
        lines.push(parsed);
    }
    Ok(lines)
}
