//! JSON file persistence for the ledger.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Ledger;
use crate::error::Result;

/// Loads and saves a [`Ledger`] as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger. A missing file yields the default ledger.
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no ledger file, starting fresh");
            return Ok(Ledger::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(ledger)?)?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendError;
    use crate::ledger::NewExpense;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.json"));
        assert_eq!(store.load().unwrap(), Ledger::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("nested").join("ledger.json"));

        let mut ledger = Ledger::default();
        ledger.set_budget(Decimal::from(12000)).unwrap();
        ledger
            .add_expense(NewExpense {
                amount: Decimal::new(125050, 2),
                category: "1".to_string(),
                description: "groceries".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            })
            .unwrap();

        store.save(&ledger).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, ledger);
        assert_eq!(loaded.expenses[0].amount.to_string(), "1250.50");
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(LedgerStore::new(path).load(), Err(SpendError::Json(_))));
    }
}
