//! Error types for the spendwise-core library.
//!
//! Amount extraction itself never fails; these cover everything around it.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the spendwise library.
#[derive(Error, Debug)]
pub enum SpendError {
    /// Ledger operation error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Notification pipeline error.
    #[error("listener error: {0}")]
    Listener(#[from] ListenerError),

    /// Deep link error.
    #[error("deep link error: {0}")]
    DeepLink(#[from] DeepLinkError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to ledger mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Expense amounts must be strictly positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Budgets may be zero but never negative.
    #[error("invalid budget: {0}")]
    InvalidBudget(Decimal),

    /// Category names must contain something besides whitespace.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// No category with the given id.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// No expense with the given id.
    #[error("expense not found: {0}")]
    ExpenseNotFound(String),

    /// A total or ratio does not fit in a `Decimal`.
    #[error("amount overflow while computing {0}")]
    AmountOverflow(&'static str),
}

/// Errors raised by the notification pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// Notification access was not granted.
    #[error("notification access not granted")]
    PermissionDenied,

    /// The suggestion sink refused a suggestion.
    #[error("failed to dispatch suggestion: {0}")]
    Dispatch(String),
}

/// Errors related to `add-expense` deep links.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    /// Not a URL at all.
    #[error("malformed URL: {0}")]
    Malformed(String),

    /// The URL does not point at the add-expense route.
    #[error("unexpected route: {0}")]
    UnexpectedRoute(String),

    /// The `amount` query parameter is absent.
    #[error("missing amount parameter")]
    MissingAmount,

    /// The `amount` query parameter is not a positive number.
    #[error("invalid amount parameter: {0}")]
    InvalidAmount(String),
}

/// Result type for the spendwise library.
pub type Result<T> = std::result::Result<T, SpendError>;
