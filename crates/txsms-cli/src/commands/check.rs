//! Check command - classify and extract a single message.

use clap::Args;
use console::style;
use tracing::debug;

use txsms_core::models::config::TxSmsConfig;
use txsms_core::{ExtractionResult, FinancialClassifier, SmsExtractor};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Message text
    #[arg(required = true)]
    text: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let classifier =
        FinancialClassifier::new().with_extra_keywords(&config.classifier.extra_keywords);

    let Some(keyword) = classifier.matched_keyword(&args.text) else {
        println!("{} Not a financial message", style("ℹ").blue());
        return Ok(());
    };
    debug!("Matched keyword {:?}", keyword);

    let result = extractor(&config)
        .analyze(&args.text)
        .map_err(|e| anyhow::anyhow!("Could not extract transaction: {}", e))?;

    println!("{}", format_result(&result, args.format)?);

    Ok(())
}

fn extractor(config: &TxSmsConfig) -> SmsExtractor {
    SmsExtractor::new().with_multiple_amount_warning(config.extraction.warn_on_multiple_amounts)
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let record = &result.record;
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "direction",
        "amount",
        "account_number",
        "merchant_name",
        "transaction_mode",
        "upi_id",
    ])?;

    wtr.write_record([
        record.direction().bucket(),
        &record.amount.to_string(),
        &record.account_number,
        &record.merchant_name,
        record.transaction_mode.as_str(),
        &record.upi_id,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data.trim_end().to_string())
}

fn format_text(result: &ExtractionResult) -> String {
    let record = &result.record;
    let mut output = String::new();

    output.push_str(&format!("Direction: {}\n", record.direction()));
    output.push_str(&format!("Amount:    {}\n", record.amount));
    output.push_str(&format!("Mode:      {}\n", record.transaction_mode));
    output.push_str(&format!("Merchant:  {}\n", record.merchant_name));

    if !record.account_number.is_empty() {
        output.push_str(&format!("Account:   {}\n", record.account_number));
    }
    if !record.upi_id.is_empty() {
        output.push_str(&format!("UPI id:    {}\n", record.upi_id));
    }
    if let Some(balance) = result.available_balance {
        output.push_str(&format!("Balance:   {}\n", balance));
    }
    if let Some(reference) = &result.reference {
        output.push_str(&format!("Reference: {}\n", reference));
    }
    if let Some(card) = &result.card_number {
        output.push_str(&format!("Card:      {}\n", card));
    }
    if let Some(date) = result.transaction_date {
        output.push_str(&format!("Date:      {}\n", date));
    }
    if let Some(time) = result.transaction_time {
        output.push_str(&format!("Time:      {}\n", time.format("%H:%M")));
    }

    if !result.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output.trim_end().to_string()
}
