//! Available balance extraction.

use rust_decimal::Decimal;

use super::amounts::parse_amount;
use super::patterns::BALANCE_PATTERN;

/// Extract the available balance quoted in a message.
///
/// The balance is informational, so a value that fails to parse is
/// reported as absent rather than as an error.
pub fn extract_balance(text: &str) -> Option<Decimal> {
    BALANCE_PATTERN
        .captures(text)
        .and_then(|caps| parse_amount(&caps[1]).ok())
}
