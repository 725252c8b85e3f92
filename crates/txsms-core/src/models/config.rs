//! Configuration structures for the message pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TxSmsError};

/// Main configuration for txsms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxSmsConfig {
    /// Classifier configuration.
    pub classifier: ClassifierConfig,

    /// Transaction extraction configuration.
    pub extraction: ExtractionConfig,

    /// Local record store configuration.
    pub storage: StorageConfig,
}

/// Financial message classifier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Keywords checked in addition to the built-in set.
    pub extra_keywords: Vec<String>,
}

/// Transaction extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Drop records that fail validation instead of storing them.
    pub require_complete: bool,

    /// Warn when a message mentions more than one amount.
    pub warn_on_multiple_amounts: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            require_complete: false,
            warn_on_multiple_amounts: true,
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the debit and credit record files.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl TxSmsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TxSmsError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TxSmsError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TxSmsConfig =
            serde_json::from_str(r#"{ "extraction": { "require_complete": true } }"#).unwrap();

        assert!(config.extraction.require_complete);
        assert!(config.extraction.warn_on_multiple_amounts);
        assert!(config.classifier.extra_keywords.is_empty());
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = TxSmsConfig::default();
        config.classifier.extra_keywords.push("refund".to_string());
        config.save(&path).unwrap();

        let loaded = TxSmsConfig::from_file(&path).unwrap();
        assert_eq!(loaded.classifier.extra_keywords, vec!["refund".to_string()]);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"extraction\": [").unwrap();

        let err = TxSmsConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, TxSmsError::Config(_)));
        assert!(err.to_string().starts_with("configuration error:"));

        let err = TxSmsConfig::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TxSmsError::Io(_)));
    }
}
