//! Transaction reference extraction.

use super::patterns::{IMPS_REFERENCE_PATTERN, NEFT_REFERENCE_PATTERN, REFERENCE_PATTERN};

/// Extract a transaction reference number.
///
/// A labelled reference ("Ref No", "txn", "UPI Ref") wins over a token
/// following an IMPS or NEFT marker.
pub fn extract_reference(text: &str) -> Option<String> {
    [
        &*REFERENCE_PATTERN,
        &*IMPS_REFERENCE_PATTERN,
        &*NEFT_REFERENCE_PATTERN,
    ]
    .iter()
    .find_map(|pattern| pattern.captures(text).map(|caps| caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reference() {
        assert_eq!(
            extract_reference("Rs 20 debited. Ref No 412345678901"),
            Some("412345678901".to_string())
        );
        assert_eq!(
            extract_reference("IMPS txn: AB12CD34 completed"),
            Some("AB12CD34".to_string())
        );
        assert_eq!(
            extract_reference("UPI Ref 998877"),
            Some("998877".to_string())
        );
        assert_eq!(extract_reference("Rs 20 credited"), None);
    }

    #[test]
    fn test_channel_references() {
        assert_eq!(
            extract_reference("Rs 200 sent by IMPS 412233445566 to A/c XX12"),
            Some("412233445566".to_string())
        );
        assert_eq!(
            extract_reference("INR 5,000 credited via NEFT:UTIB0001234"),
            Some("UTIB0001234".to_string())
        );
    }

    #[test]
    fn test_labelled_reference_wins() {
        assert_eq!(
            extract_reference("NEFT UTIB0001234 credited, Ref 5566"),
            Some("5566".to_string())
        );
    }
}
