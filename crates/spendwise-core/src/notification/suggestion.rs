//! User-facing expense suggestions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deep_link;

const SUGGESTION_TITLE: &str = "Expense Detected";

/// A local notification offering to record a detected transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSuggestion {
    pub title: String,
    pub body: String,
    /// Amount carried in the notification payload.
    pub amount: Decimal,
}

impl ExpenseSuggestion {
    pub fn new(amount: Decimal) -> Self {
        Self {
            title: SUGGESTION_TITLE.to_string(),
            body: format!(
                "We detected a transaction of ₹{}. Tap to add it as an expense.",
                amount.normalize()
            ),
            amount,
        }
    }

    /// Deep link opened when the user taps the suggestion.
    pub fn deep_link(&self, scheme: &str) -> String {
        deep_link::add_expense_url(scheme, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_suggestion_text() {
        let suggestion = ExpenseSuggestion::new(Decimal::from_str("1250.50").unwrap());
        assert_eq!(suggestion.title, "Expense Detected");
        assert_eq!(
            suggestion.body,
            "We detected a transaction of ₹1250.5. Tap to add it as an expense."
        );
    }

    #[test]
    fn test_suggestion_deep_link() {
        let suggestion = ExpenseSuggestion::new(Decimal::from(120));
        assert_eq!(
            suggestion.deep_link("spendwise"),
            "spendwise://add-expense?amount=120"
        );
    }
}
