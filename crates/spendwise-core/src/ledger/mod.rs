//! Expense ledger: overall budget, categories and expenses.

mod store;
mod summary;

pub use store::LedgerStore;
pub use summary::{CategorySpend, MonthlySummary};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::ledger::{Category, Expense, default_categories};

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Input for [`Ledger::add_expense`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// All persisted expense-tracking state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// Overall monthly budget.
    pub budget: Decimal,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            budget: Decimal::ZERO,
            categories: default_categories(),
            expenses: Vec::new(),
        }
    }
}

impl Ledger {
    pub fn set_budget(&mut self, budget: Decimal) -> Result<()> {
        if budget < Decimal::ZERO {
            return Err(LedgerError::InvalidBudget(budget));
        }
        self.budget = budget;
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by name, ignoring case.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn add_category(
        &mut self,
        name: &str,
        color: &str,
        budget: Option<Decimal>,
    ) -> Result<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyCategoryName);
        }
        if let Some(budget) = budget.filter(|b| *b < Decimal::ZERO) {
            return Err(LedgerError::InvalidBudget(budget));
        }

        let mut category = Category::new(Uuid::new_v4().to_string(), name, color);
        category.budget = budget;
        debug!(id = %category.id, name, "category added");

        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Remove a category. Its expenses are kept.
    pub fn delete_category(&mut self, id: &str) -> Result<Category> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LedgerError::CategoryNotFound(id.to_string()))?;
        Ok(self.categories.remove(index))
    }

    pub fn set_category_budget(&mut self, id: &str, budget: Decimal) -> Result<()> {
        if budget < Decimal::ZERO {
            return Err(LedgerError::InvalidBudget(budget));
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::CategoryNotFound(id.to_string()))?;
        category.budget = Some(budget);
        Ok(())
    }

    pub fn add_expense(&mut self, expense: NewExpense) -> Result<&Expense> {
        if expense.amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(expense.amount));
        }
        if self.category(&expense.category).is_none() {
            return Err(LedgerError::CategoryNotFound(expense.category));
        }

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            date: expense.date,
        };
        debug!(id = %expense.id, amount = %expense.amount, "expense added");

        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn delete_expense(&mut self, id: &str) -> Result<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(id.to_string()))?;
        Ok(self.expenses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_expense(amount: i64, category: &str) -> NewExpense {
        NewExpense {
            amount: Decimal::from(amount),
            category: category.to_string(),
            description: "lunch".to_string(),
            date: date(2024, 3, 14),
        }
    }

    #[test]
    fn test_default_ledger() {
        let ledger = Ledger::default();
        let names: Vec<&str> = ledger.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport", "Shopping", "Entertainment", "Bills"]);
        assert_eq!(ledger.budget, Decimal::ZERO);
        assert!(ledger.expenses.is_empty());
    }

    #[test]
    fn test_budget_validation() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.set_budget(Decimal::from(20000)), Ok(()));
        assert_eq!(ledger.set_budget(Decimal::ZERO), Ok(()));
        assert_eq!(
            ledger.set_budget(Decimal::from(-1)),
            Err(LedgerError::InvalidBudget(Decimal::from(-1)))
        );
        assert_eq!(ledger.budget, Decimal::ZERO);
    }

    #[test]
    fn test_add_category() {
        let mut ledger = Ledger::default();
        let id = ledger
            .add_category("  Rent ", "#123456", Some(Decimal::from(15000)))
            .unwrap()
            .id
            .clone();

        let category = ledger.category(&id).unwrap();
        assert_eq!(category.name, "Rent");
        assert_eq!(category.budget, Some(Decimal::from(15000)));
        assert_eq!(ledger.category_by_name("rent").map(|c| c.id.as_str()), Some(id.as_str()));

        assert_eq!(
            ledger.add_category("   ", "#000000", None).unwrap_err(),
            LedgerError::EmptyCategoryName
        );
    }

    #[test]
    fn test_delete_category() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.delete_category("2").unwrap().name, "Transport");
        assert_eq!(
            ledger.delete_category("2"),
            Err(LedgerError::CategoryNotFound("2".to_string()))
        );
    }

    #[test]
    fn test_set_category_budget() {
        let mut ledger = Ledger::default();
        ledger.set_category_budget("1", Decimal::from(5000)).unwrap();
        assert_eq!(ledger.category("1").unwrap().budget, Some(Decimal::from(5000)));
        assert_eq!(
            ledger.set_category_budget("missing", Decimal::ONE),
            Err(LedgerError::CategoryNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_add_expense_validation() {
        let mut ledger = Ledger::default();

        assert_eq!(
            ledger.add_expense(new_expense(0, "1")).unwrap_err(),
            LedgerError::InvalidAmount(Decimal::ZERO)
        );
        assert_eq!(
            ledger.add_expense(new_expense(10, "99")).unwrap_err(),
            LedgerError::CategoryNotFound("99".to_string())
        );

        let expense = ledger.add_expense(new_expense(250, "1")).unwrap();
        assert_eq!(expense.amount, Decimal::from(250));
        assert_eq!(ledger.expenses.len(), 1);
    }

    #[test]
    fn test_delete_expense() {
        let mut ledger = Ledger::default();
        let id = ledger.add_expense(new_expense(250, "1")).unwrap().id.clone();

        assert_eq!(ledger.delete_expense(&id).unwrap().amount, Decimal::from(250));
        assert_eq!(ledger.delete_expense(&id), Err(LedgerError::ExpenseNotFound(id)));
    }
}
