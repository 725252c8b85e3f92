//! Card number extraction.

use super::patterns::{CARD_NUMBER_PATTERN, MASKED_CARD_PATTERN};

/// Extract the card digits quoted in a message ("card ending in 4321",
/// "Card XX4321"). Only the digits are returned.
pub fn extract_card_number(text: &str) -> Option<String> {
    [&*CARD_NUMBER_PATTERN, &*MASKED_CARD_PATTERN]
        .iter()
        .find_map(|pattern| pattern.captures(text).map(|caps| caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ending() {
        assert_eq!(
            extract_card_number("Rs 1,200 spent on your card ending in 4321 at AMAZON"),
            Some("4321".to_string())
        );
        assert_eq!(
            extract_card_number("Card no. 98765 used for INR 50"),
            Some("98765".to_string())
        );
    }

    #[test]
    fn test_masked_card() {
        assert_eq!(
            extract_card_number("INR 999 spent on Card XX7788"),
            Some("7788".to_string())
        );
    }

    #[test]
    fn test_no_card() {
        assert_eq!(extract_card_number("Rs.500 debited from A/c XX1234"), None);
        assert_eq!(extract_card_number("card ending 12"), None);
    }
}
