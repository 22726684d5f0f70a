//! Monthly spending summaries.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Ledger, Result};
use crate::error::LedgerError;
use crate::models::ledger::Expense;

/// Spending in one category for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category_id: String,
    pub name: String,
    pub spent: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl CategorySpend {
    pub fn over_budget(&self) -> bool {
        self.budget.is_some_and(|budget| budget > Decimal::ZERO && self.spent > budget)
    }
}

/// Spending overview for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub budget: Decimal,
    pub total_spent: Decimal,
    /// Budget minus spending; negative when overspent.
    pub remaining: Decimal,
    /// Share of the budget spent, in percent (0 without a budget).
    pub spent_percentage: Decimal,
    /// Every category in ledger order, including unused ones.
    pub by_category: Vec<CategorySpend>,
    pub expenses: Vec<Expense>,
}

impl MonthlySummary {
    pub fn category(&self, id: &str) -> Option<&CategorySpend> {
        self.by_category.iter().find(|c| c.category_id == id)
    }
}

impl Ledger {
    /// Expenses dated in `year`/`month` (1-based), in ledger order.
    pub fn expenses_in(&self, year: i32, month: u32) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |e| e.date.year() == year && e.date.month() == month)
    }

    /// Summarize the expenses dated in `year`/`month` (1-based).
    ///
    /// Expenses whose category was deleted count towards the total only.
    pub fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary> {
        let expenses: Vec<Expense> = self.expenses_in(year, month).cloned().collect();

        let total_spent = checked_total(expenses.iter(), "total spent")?;

        let by_category = self
            .categories
            .iter()
            .map(|category| -> Result<CategorySpend> {
                let spent = checked_total(
                    expenses.iter().filter(|e| e.category == category.id),
                    "category spend",
                )?;
                Ok(CategorySpend {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    spent,
                    budget: category.budget,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let spent_percentage = if self.budget > Decimal::ZERO {
            total_spent
                .checked_div(self.budget)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(LedgerError::AmountOverflow("spent percentage"))?
                .round_dp(2)
        } else {
            Decimal::ZERO
        };

        let remaining = self
            .budget
            .checked_sub(total_spent)
            .ok_or(LedgerError::AmountOverflow("remaining budget"))?;

        Ok(MonthlySummary {
            year,
            month,
            budget: self.budget,
            total_spent,
            remaining,
            spent_percentage,
            by_category,
            expenses,
        })
    }
}

fn checked_total<'a>(
    mut expenses: impl Iterator<Item = &'a Expense>,
    what: &'static str,
) -> Result<Decimal> {
    expenses.try_fold(Decimal::ZERO, |acc, e| {
        acc.checked_add(e.amount)
            .ok_or(LedgerError::AmountOverflow(what))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::NewExpense;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn add(ledger: &mut Ledger, amount: &str, category: &str, (y, m, d): (i32, u32, u32)) {
        ledger
            .add_expense(NewExpense {
                amount: dec(amount),
                category: category.to_string(),
                description: String::new(),
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            })
            .unwrap();
    }

    #[test]
    fn test_monthly_summary() {
        let mut ledger = Ledger::default();
        ledger.set_budget(dec("8000")).unwrap();
        ledger.set_category_budget("1", dec("3000")).unwrap();

        add(&mut ledger, "250", "1", (2024, 3, 1));
        add(&mut ledger, "1250.50", "1", (2024, 3, 31));
        add(&mut ledger, "120", "2", (2024, 3, 15));
        add(&mut ledger, "999", "1", (2024, 4, 1));
        add(&mut ledger, "50", "1", (2023, 3, 10));

        let summary = ledger.monthly_summary(2024, 3).unwrap();

        assert_eq!(summary.expenses.len(), 3);
        assert_eq!(summary.total_spent, dec("1620.50"));
        assert_eq!(summary.remaining, dec("6379.50"));
        assert_eq!(summary.spent_percentage, dec("20.26"));

        let food = summary.category("1").unwrap();
        assert_eq!(food.spent, dec("1500.50"));
        assert_eq!(food.budget, Some(dec("3000")));
        assert!(!food.over_budget());

        assert_eq!(summary.category("2").unwrap().spent, dec("120"));
        assert_eq!(summary.category("5").unwrap().spent, Decimal::ZERO);
        assert_eq!(summary.by_category.len(), 5);
    }

    #[test]
    fn test_summary_without_budget() {
        let mut ledger = Ledger::default();
        add(&mut ledger, "100", "3", (2024, 1, 5));

        let summary = ledger.monthly_summary(2024, 1).unwrap();
        assert_eq!(summary.spent_percentage, Decimal::ZERO);
        assert_eq!(summary.remaining, dec("-100"));
    }

    #[test]
    fn test_deleted_category_counts_in_total_only() {
        let mut ledger = Ledger::default();
        add(&mut ledger, "100", "3", (2024, 1, 5));
        add(&mut ledger, "40", "4", (2024, 1, 6));
        ledger.delete_category("3").unwrap();

        let summary = ledger.monthly_summary(2024, 1).unwrap();
        assert_eq!(summary.total_spent, dec("140"));
        assert!(summary.category("3").is_none());
        let categorized: Decimal = summary.by_category.iter().map(|c| c.spent).sum();
        assert_eq!(categorized, dec("40"));
    }

    #[test]
    fn test_over_budget() {
        let mut ledger = Ledger::default();
        ledger.set_category_budget("2", dec("100")).unwrap();
        add(&mut ledger, "150", "2", (2024, 2, 2));

        assert!(ledger.monthly_summary(2024, 2).unwrap().category("2").unwrap().over_budget());
    }

    #[test]
    fn test_tiny_budget_overflows_percentage() {
        let mut ledger = Ledger::default();
        ledger.set_budget(dec("0.0000000000000000000000000001")).unwrap();
        add(&mut ledger, "1000", "1", (2024, 3, 4));

        assert_eq!(
            ledger.monthly_summary(2024, 3),
            Err(LedgerError::AmountOverflow("spent percentage"))
        );
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut ledger = Ledger::default();
        add(&mut ledger, &Decimal::MAX.to_string(), "1", (2024, 3, 4));
        add(&mut ledger, &Decimal::MAX.to_string(), "2", (2024, 3, 5));

        assert_eq!(
            ledger.monthly_summary(2024, 3),
            Err(LedgerError::AmountOverflow("total spent"))
        );
        assert_eq!(ledger.expenses_in(2024, 3).count(), 2);
    }
}
