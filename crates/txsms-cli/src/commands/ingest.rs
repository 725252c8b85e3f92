//! Ingest command - route message files into the local record store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use txsms_core::{Direction, InboundMessage, MessageRouter, RouteOutcome};

use crate::store::JsonlSink;

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// Message files or glob pattern (.txt, .json, .jsonl)
    #[arg(required = true)]
    input: String,

    /// Store directory (default: storage.data_dir from config)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Drop records missing an amount or an account/UPI id
    #[arg(long)]
    require_complete: bool,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Per-run counters.
#[derive(Debug, Default, PartialEq, Eq)]
struct IngestSummary {
    messages: usize,
    debit: usize,
    credit: usize,
    not_financial: usize,
    dropped: usize,
}

impl IngestSummary {
    fn record(&mut self, outcome: &RouteOutcome) {
        self.messages += 1;
        match outcome {
            RouteOutcome::NotFinancial => self.not_financial += 1,
            RouteOutcome::Dropped { .. } => self.dropped += 1,
            RouteOutcome::Stored { direction: Direction::Debit, .. } => self.debit += 1,
            RouteOutcome::Stored { direction: Direction::Credit, .. } => self.credit += 1,
        }
    }
}

pub async fn run(args: IngestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "json" | "jsonl")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    let store_dir = args
        .store
        .clone()
        .unwrap_or_else(|| config.storage.data_dir.clone());
    let sink = Arc::new(JsonlSink::open(&store_dir)?);

    let router = MessageRouter::from_config(&config, sink.clone())
        .with_require_complete(args.require_complete || config.extraction.require_complete);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut summary = IngestSummary::default();
    let mut failed_files = Vec::new();

    for path in &files {
        let messages = match read_messages(path) {
            Ok(messages) => messages,
            Err(e) if args.continue_on_error => {
                warn!("Failed to read {}: {}", path.display(), e);
                failed_files.push((path.clone(), e.to_string()));
                pb.inc(1);
                continue;
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                anyhow::bail!("Ingest failed: {}", e);
            }
        };

        debug!("Read {} messages from {}", messages.len(), path.display());

        for message in &messages {
            let outcome = router.route(message, Utc::now())?;
            summary.record(&outcome);
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} Routed {} messages from {} files in {:?}",
        style("✓").green(),
        summary.messages,
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} debit, {} credit stored; {} not financial, {} dropped",
        style(summary.debit).green(),
        style(summary.credit).green(),
        summary.not_financial,
        style(summary.dropped).yellow()
    );
    println!(
        "   Store {} now holds {} debit and {} credit records",
        store_dir.display(),
        sink.read_bucket(Direction::Debit)?.len(),
        sink.read_bucket(Direction::Credit)?.len()
    );

    if !failed_files.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, error) in &failed_files {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}

/// Read messages from a file. Text files hold one message per line; JSON
/// files hold one `{"sender": ..., "body": ...}` object per line.
fn read_messages(path: &Path) -> anyhow::Result<Vec<InboundMessage>> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "json" | "jsonl"))
        .unwrap_or(false);

    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| -> anyhow::Result<InboundMessage> {
            if is_json {
                Ok(serde_json::from_str(line)?)
            } else {
                Ok(InboundMessage::new(line))
            }
        })
        .collect()
}
