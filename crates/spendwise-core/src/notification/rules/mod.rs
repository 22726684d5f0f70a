//! Rule-based amount extraction for transaction notifications.

pub mod amount;
pub mod patterns;

pub use amount::{
    AmountExtractor, ExtractionResult, RuleMatch, TransactionRule, format_inr, parse_amount,
};
