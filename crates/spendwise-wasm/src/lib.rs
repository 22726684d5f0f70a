//! WASM bindings for spendwise.
//!
//! Lets a JavaScript host (mobile or browser) run amount extraction on
//! incoming notifications and build add-expense deep links.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use spendwise_core::notification::deep_link;
use spendwise_core::{AmountExtractor, ExpenseSuggestion};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract the transaction amount from notification text.
///
/// Returns the exact decimal as a string ("1250.50"), or `undefined`.
#[wasm_bindgen]
pub fn extract_amount(text: &str) -> Option<String> {
    spendwise_core::extract(text).amount().map(|a| a.to_string())
}

/// Like [`extract_amount`] but also reports the rule and matched text.
#[wasm_bindgen]
pub fn explain(text: &str) -> Result<JsValue, JsValue> {
    let found = AmountExtractor::new().extract_match(text);
    serde_wasm_bindgen::to_value(&found).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build an add-expense deep link for an amount given as a string.
#[wasm_bindgen]
pub fn add_expense_url(scheme: &str, amount: &str) -> Result<String, JsValue> {
    let amount = parse_positive(amount).ok_or_else(|| {
        JsValue::from_str(&format!("invalid amount: {}", amount))
    })?;
    Ok(deep_link::add_expense_url(scheme, amount))
}

/// Read the amount out of an add-expense deep link.
#[wasm_bindgen]
pub fn parse_add_expense_url(link: &str) -> Result<String, JsValue> {
    deep_link::parse_add_expense_url(link)
        .map(|a| a.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Suggestion payload handed to the host's local notification API.
#[derive(Debug, Serialize)]
struct DetectedExpense {
    title: String,
    body: String,
    amount: String,
    deep_link: String,
}

/// Notification handler for the host app.
#[wasm_bindgen]
pub struct ExpenseDetector {
    extractor: AmountExtractor,
    scheme: String,
}

#[wasm_bindgen]
impl ExpenseDetector {
    /// Create a detector producing links with the given URL scheme.
    #[wasm_bindgen(constructor)]
    pub fn new(scheme: &str) -> Self {
        Self {
            extractor: AmountExtractor::new(),
            scheme: scheme.to_string(),
        }
    }

    /// Returns a suggestion object for a transaction notification, or `null`.
    #[wasm_bindgen]
    pub fn detect(&self, text: &str) -> Result<JsValue, JsValue> {
        let detected = self.detect_expense(text);
        serde_wasm_bindgen::to_value(&detected).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl ExpenseDetector {
    fn detect_expense(&self, text: &str) -> Option<DetectedExpense> {
        let amount = self.extractor.extract(text).amount()?;
        let suggestion = ExpenseSuggestion::new(amount);

        Some(DetectedExpense {
            deep_link: suggestion.deep_link(&self.scheme),
            amount: amount.to_string(),
            title: suggestion.title,
            body: suggestion.body,
        })
    }
}

fn parse_positive(amount: &str) -> Option<Decimal> {
    Decimal::from_str(amount.trim())
        .ok()
        .filter(|a| *a > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_amount() {
        assert_eq!(extract_amount("spent Rs. 1,250.50"), Some("1250.50".to_string()));
        assert_eq!(extract_amount("hello"), None);
    }

    #[test]
    fn test_add_expense_url() {
        assert_eq!(
            add_expense_url("spendwise", "120").ok(),
            Some("spendwise://add-expense?amount=120".to_string())
        );
    }

    #[test]
    fn test_detect_expense() {
        let detector = ExpenseDetector::new("spendwise");
        let detected = detector.detect_expense("sent ₹450 to Jane Doe").unwrap();

        assert_eq!(detected.amount, "450");
        assert_eq!(detected.title, "Expense Detected");
        assert_eq!(detected.deep_link, "spendwise://add-expense?amount=450");
        assert!(detector.detect_expense("Your OTP is 1234").is_none());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 99.5 "), Some(Decimal::from_str("99.5").unwrap()));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("abc"), None);
    }
}
