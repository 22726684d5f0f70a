//! Core library for spendwise.
//!
//! This crate provides:
//! - Transaction amount extraction from bank/UPI notification text
//! - Expense suggestions and `add-expense` deep links
//! - An event-driven notification pipeline (feature `listener`)
//! - The expense ledger: budget, categories, expenses and monthly summaries

pub mod error;
pub mod ledger;
pub mod models;
pub mod notification;

pub use error::{Result, SpendError};
pub use ledger::{CategorySpend, Ledger, LedgerStore, MonthlySummary, NewExpense};
pub use models::config::SpendConfig;
pub use models::ledger::{Category, Expense};
pub use notification::rules::{AmountExtractor, ExtractionResult, RuleMatch, TransactionRule};
pub use notification::{ExpenseSuggestion, extract};

#[cfg(feature = "listener")]
pub use notification::listener::{
    ListenerStats, NotificationEvent, NotificationListener, PermissionGate, PermissionStatus,
    SuggestionSink, channel, ensure_permission,
};
