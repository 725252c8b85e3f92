//! CLI subcommands.

pub mod check;
pub mod config;
pub mod ingest;

use std::path::{Path, PathBuf};

use txsms_core::TxSmsConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("txsms")
        .join("config.json")
}

/// Load the config given with `--config`, else the default file if it
/// exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TxSmsConfig> {
    if let Some(path) = config_path {
        return Ok(TxSmsConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(TxSmsConfig::from_file(&default_path)?)
    } else {
        Ok(TxSmsConfig::default())
    }
}
