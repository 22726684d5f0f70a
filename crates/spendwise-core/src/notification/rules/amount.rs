//! Transaction amount extraction.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::patterns::{AMOUNT_FIRST, DEBIT_KEYWORD_FIRST, UPI_PAYMENT};

/// A transaction pattern rule. Declaration order is evaluation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionRule {
    /// Debit keyword, then currency marker and amount.
    DebitKeywordFirst,
    /// Currency marker and amount, then "was spent" or "debited".
    AmountFirst,
    /// "paid", "sent" or "transferred" directly before the currency marker.
    UpiPayment,
}

impl TransactionRule {
    /// All rules in priority order.
    pub const ALL: [TransactionRule; 3] = [
        TransactionRule::DebitKeywordFirst,
        TransactionRule::AmountFirst,
        TransactionRule::UpiPayment,
    ];

    /// Compiled pattern for this rule.
    pub fn pattern(self) -> &'static Regex {
        match self {
            TransactionRule::DebitKeywordFirst => &DEBIT_KEYWORD_FIRST,
            TransactionRule::AmountFirst => &AMOUNT_FIRST,
            TransactionRule::UpiPayment => &UPI_PAYMENT,
        }
    }

    /// Zero-based priority, lower wins.
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TransactionRule::DebitKeywordFirst => "debit_keyword_first",
            TransactionRule::AmountFirst => "amount_first",
            TransactionRule::UpiPayment => "upi_payment",
        }
    }
}

impl fmt::Display for TransactionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of running the extractor over one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// A strictly positive transaction amount.
    Amount(Decimal),
    /// No usable amount in the text.
    NoMatch,
}

impl ExtractionResult {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            ExtractionResult::Amount(value) => Some(*value),
            ExtractionResult::NoMatch => None,
        }
    }
}

impl From<Option<Decimal>> for ExtractionResult {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(ExtractionResult::NoMatch, ExtractionResult::Amount)
    }
}

/// Details of a successful extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Rule that fired.
    pub rule: TransactionRule,
    /// Parsed amount.
    pub amount: Decimal,
    /// Full text matched by the rule.
    pub source: String,
    /// Byte range of `source` in the input.
    pub position: (usize, usize),
}

/// Amount extractor over the fixed rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the transaction amount from notification text.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.extract_match(text).map(|m| m.amount).into()
    }

    /// Extract the amount together with the rule and text that produced it.
    ///
    /// Only the first rule that matches structurally is consulted. If its
    /// capture does not parse to a positive amount the result is `None`;
    /// later rules are not tried.
    pub fn extract_match(&self, text: &str) -> Option<RuleMatch> {
        for rule in TransactionRule::ALL {
            let Some(caps) = rule.pattern().captures(text) else {
                trace!(rule = rule.name(), "no match");
                continue;
            };

            let full = caps.get(0)?;
            let raw = caps.get(1)?.as_str();

            return match parse_amount(raw).filter(|amount| *amount > Decimal::ZERO) {
                Some(amount) => {
                    debug!(rule = rule.name(), %amount, "extracted transaction amount");
                    Some(RuleMatch {
                        rule,
                        amount,
                        source: full.as_str().to_string(),
                        position: (full.start(), full.end()),
                    })
                }
                None => {
                    debug!(rule = rule.name(), raw, "matched capture is not a positive amount");
                    None
                }
            };
        }

        None
    }
}

/// Parse a captured amount such as "1,250.50".
///
/// Thousands separators are dropped and the decimal scale is kept as written.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

/// Format an amount in rupees with two decimals (₹1250.50).
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}
