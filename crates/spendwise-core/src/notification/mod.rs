//! Transaction notification handling.

pub mod deep_link;
#[cfg(feature = "listener")]
pub mod listener;
pub mod rules;
mod suggestion;

pub use suggestion::ExpenseSuggestion;

use rules::{AmountExtractor, ExtractionResult};

/// Extract the transaction amount from notification text.
///
/// Never fails: unrelated or malformed text yields [`ExtractionResult::NoMatch`].
pub fn extract(text: &str) -> ExtractionResult {
    AmountExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_common_notifications() {
        let cases = [
            ("debited by INR 250", "250"),
            ("spent Rs. 1,250.50", "1250.50"),
            ("INR 1,250.50 was spent", "1250.50"),
            ("paid ₹120 to John", "120"),
            ("sent ₹450 to Jane Doe", "450"),
            ("DEBITED BY inr 250", "250"),
        ];

        for (text, expected) in cases {
            assert_eq!(
                extract(text),
                ExtractionResult::Amount(Decimal::from_str(expected).unwrap()),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_extract_never_panics_on_odd_input() {
        for text in ["", "₹", "Rs.", "INR ,", "paid ₹.", "spent\u{0}Rs 5", "🙂 debited ₹ 1,,0"] {
            let _ = extract(text);
        }
        assert_eq!(extract("spent\u{0}Rs 5").amount(), Some(Decimal::from(5)));
    }
}
