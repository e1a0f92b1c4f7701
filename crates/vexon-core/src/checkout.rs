//! Checkout form helpers.

use crate::model::CardDetails;

/// Number the sandbox gateway always approves
const STRIPE_TEST_CARD: &str = "4242424242424242";

/// Prefix of the generic Visa test range
const VISA_TEST_PREFIX: &str = "4111";

/// Group the first 16 digits of `input` in blocks of four.
///
/// Input with fewer than four digits is returned unchanged so partial typing
/// is not mangled.
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).take(16).collect();
    if digits.len() < 4 {
        return input.to_string();
    }

    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

impl CardDetails {
    /// Whether the checkout page lets this card through to the gateway
    pub fn is_accepted_test_card(&self) -> bool {
        let compact: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        compact == STRIPE_TEST_CARD || self.card_number.starts_with(VISA_TEST_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_digits() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-4242 42"), "4242 4242 42");
        assert_eq!(format_card_number("42424"), "4242 4");
    }

    #[test]
    fn test_format_truncates_to_sixteen() {
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
    }

    #[test]
    fn test_format_keeps_short_input() {
        assert_eq!(format_card_number("42"), "42");
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("ab1"), "ab1");
    }

    #[test]
    fn test_accepted_cards() {
        let card = |n: &str| CardDetails {
            card_number: n.into(),
            ..Default::default()
        };
        assert!(card("4242 4242 4242 4242").is_accepted_test_card());
        assert!(card("4111111111111111").is_accepted_test_card());
        assert!(!card("5555 5555 5555 4444").is_accepted_test_card());
        assert!(!card("4242").is_accepted_test_card());
    }
}
