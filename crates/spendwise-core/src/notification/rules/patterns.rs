//! Regex patterns for bank and UPI transaction notifications.
//!
//! Every pattern captures the amount in group 1. Currency markers (`INR`,
//! `Rs`, `Rs.`, `₹`) are interchangeable in all of them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Debit keyword before the amount ("debited by INR 250", "spent Rs. 1,250.50").
    // The gap is lazy and never crosses a line terminator (\r, \n, U+2028, U+2029).
    pub static ref DEBIT_KEYWORD_FIRST: Regex = Regex::new(
        r"(?i)(?:debited|spent|charged|withdrawn)[^\r\n\x{2028}\x{2029}]+?(?:INR|Rs\.?|₹)\s*([0-9,]+\.?[0-9]*)"
    ).unwrap();

    // Amount before the completion phrase ("INR 1,250.50 was spent").
    pub static ref AMOUNT_FIRST: Regex = Regex::new(
        r"(?i)(?:INR|Rs\.?|₹)\s*([0-9,]+\.?[0-9]*)\s*(?:was\s?spent|debited)"
    ).unwrap();

    // UPI payment keyword directly before the amount ("paid ₹120 to X").
    pub static ref UPI_PAYMENT: Regex = Regex::new(
        r"(?i)(?:paid|sent|transferred)\s*(?:₹|INR|Rs\.?)\s*([0-9,]+\.?[0-9]*)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_keyword_first_stays_on_one_line() {
        assert!(DEBIT_KEYWORD_FIRST.is_match("debited by INR 250"));
        assert!(!DEBIT_KEYWORD_FIRST.is_match("debited\nINR 250"));
        assert!(!DEBIT_KEYWORD_FIRST.is_match("debited\rINR 5"));
        assert!(!DEBIT_KEYWORD_FIRST.is_match("debited\u{2028}INR 5"));
        assert!(!DEBIT_KEYWORD_FIRST.is_match("debited\u{2029}INR 5"));
    }

    #[test]
    fn test_amount_first_accepts_joined_phrase() {
        let caps = AMOUNT_FIRST.captures("Rs.99 wasspent").unwrap();
        assert_eq!(&caps[1], "99");
    }

    #[test]
    fn test_upi_payment_requires_adjacent_marker() {
        assert!(UPI_PAYMENT.is_match("paid ₹120 to John"));
        assert!(!UPI_PAYMENT.is_match("paid to John ₹120"));
    }

    #[test]
    fn test_capture_ignores_non_ascii_digits() {
        assert!(!UPI_PAYMENT.is_match("paid ₹१२०"));
    }
}
