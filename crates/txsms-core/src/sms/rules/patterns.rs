//! Common regex patterns for bank SMS extraction.
//!
//! Every pattern runs with Unicode disabled (`-u`): `\w`, `\s`, `\d` and
//! case-insensitive matching only cover ASCII, so "café@okaxis" is not a
//! UPI handle and "Rſ" is not a currency marker.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency marker followed by an amount (1,250.50 / 500 / 500.5)
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"(?i-u)(?:RS|INR|₹)[.\s]*([0-9,]+(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Account label followed by a masked or plain account number
    pub static ref ACCOUNT_PATTERN: Regex = Regex::new(
        r"(?i-u)(?:a/c|acct|account)\s*(?:no|number|#)?\s*[.:]*\s*([X0-9]+)"
    ).unwrap();

    // UPI handle (local@domain)
    pub static ref UPI_ID_PATTERN: Regex = Regex::new(
        r"(?-u)[\w.-]+@[\w.-]+"
    ).unwrap();

    // Counterparty phrase: "to <name> via", "from <name> by"
    pub static ref MERCHANT_PATTERN: Regex = Regex::new(
        r"(?i-u)(?:to|from)\s+([\w\s]+)\s+(?:via|through|using|by)"
    ).unwrap();

    // Available balance
    pub static ref BALANCE_PATTERN: Regex = Regex::new(
        r"(?i-u)(?:available|avl|bal)(?:ance)?\s*(?:is)?\s*(?:RS|INR|₹)[.\s]*([0-9,]+(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Reference numbers, tried in order
    pub static ref REFERENCE_PATTERN: Regex = Regex::new(
        r"(?i-u)(?:ref(?:erence)?|txn)\s*(?:no\.?|number)?\s*[:#]?\s*([A-Za-z0-9]+)"
    ).unwrap();

    pub static ref IMPS_REFERENCE_PATTERN: Regex = Regex::new(
        r"(?i-u)IMPS(?::|\s+)([A-Za-z0-9]+)"
    ).unwrap();

    pub static ref NEFT_REFERENCE_PATTERN: Regex = Regex::new(
        r"(?i-u)NEFT(?::|\s+)([A-Za-z0-9]+)"
    ).unwrap();

    // Card digits: "card ending in 4321", "Card no. 1234", "card XX4321"
    pub static ref CARD_NUMBER_PATTERN: Regex = Regex::new(
        r"(?i-u)card\s*(?:no\.?)?\s*(?:ending(?:\s+in)?)?\s*([0-9]{4,})"
    ).unwrap();

    pub static ref MASKED_CARD_PATTERN: Regex = Regex::new(
        r"(?i-u)card\s*X+([0-9]{4})"
    ).unwrap();

    // Dates: 05/03/24, 05-03-2024, 05-Mar-24, 05-Mar2024
    pub static ref NUMERIC_DATE_PATTERN: Regex = Regex::new(
        r"(?-u)\b(\d{2})[-/](\d{2})[-/](\d{2,4})\b"
    ).unwrap();

    pub static ref NAMED_MONTH_DATE_PATTERN: Regex = Regex::new(
        r"(?-u)\b(\d{2})-([A-Za-z]{3})-?(\d{2,4})\b"
    ).unwrap();

    // Clock time: 14:32, 9:05
    pub static ref TIME_PATTERN: Regex = Regex::new(
        r"(?-u)\b(\d{1,2}):(\d{2})\b"
    ).unwrap();
}
