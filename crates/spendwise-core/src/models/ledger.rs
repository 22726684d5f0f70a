//! Expense ledger data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending category, optionally with its own monthly budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display color (`#RRGGBB`).
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            budget: None,
        }
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    /// Id of the category the expense belongs to.
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

/// Categories a fresh ledger starts with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Food", "#FF6B6B"),
        Category::new("2", "Transport", "#4ECDC4"),
        Category::new("3", "Shopping", "#45B7D1"),
        Category::new("4", "Entertainment", "#FFA07A"),
        Category::new("5", "Bills", "#98D8C8"),
    ]
}
