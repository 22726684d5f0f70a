//! CLI subcommands.

pub mod budget;
pub mod category;
pub mod config;
pub mod expense;
pub mod extract;
pub mod scan;
pub mod summary;

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use spendwise_core::{Ledger, LedgerStore, SpendConfig};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendwise")
        .join("config.json")
}

pub fn default_ledger_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendwise")
        .join("ledger.json")
}

/// Load the configuration from `path`, the default location, or defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<SpendConfig> {
    if let Some(path) = path {
        let path = Path::new(path);
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(SpendConfig::from_file(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(SpendConfig::from_file(&default_path)?)
    } else {
        Ok(SpendConfig::default())
    }
}

/// Resolve the ledger file: explicit flag, then config, then data directory.
pub fn ledger_store(config: &SpendConfig, ledger_path: Option<&Path>) -> LedgerStore {
    let path = ledger_path
        .map(Path::to_path_buf)
        .or_else(|| config.ledger.data_file.clone())
        .unwrap_or_else(default_ledger_path);

    debug!("Using ledger at {}", path.display());
    LedgerStore::new(path)
}

/// Load config and ledger for a ledger-editing command.
pub fn open_ledger(
    config_path: Option<&str>,
    ledger_path: Option<&Path>,
) -> anyhow::Result<(LedgerStore, Ledger)> {
    let config = load_config(config_path)?;
    let store = ledger_store(&config, ledger_path);
    let ledger = store.load()?;
    Ok((store, ledger))
}

/// Parse `YYYY-MM`, defaulting to the current month.
pub fn parse_month(month: Option<&str>) -> anyhow::Result<(i32, u32)> {
    let Some(month) = month else {
        let today = Local::now().date_naive();
        return Ok((today.year(), today.month()));
    };

    let date = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}', expected YYYY-MM", month))?;
    Ok((date.year(), date.month()))
}

/// Find a category by id, falling back to a case-insensitive name match.
pub fn resolve_category(ledger: &Ledger, key: &str) -> anyhow::Result<String> {
    ledger
        .category(key)
        .or_else(|| ledger.category_by_name(key))
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2024-03")).unwrap(), (2024, 3));
        assert!(parse_month(Some("2024-13")).is_err());
        assert!(parse_month(Some("March")).is_err());
    }

    #[test]
    fn test_resolve_category() {
        let ledger = Ledger::default();
        assert_eq!(resolve_category(&ledger, "2").unwrap(), "2");
        assert_eq!(resolve_category(&ledger, "bills").unwrap(), "5");
        assert!(resolve_category(&ledger, "Travel").is_err());
    }

    #[test]
    fn test_ledger_flag_wins() {
        let mut config = SpendConfig::default();
        config.ledger.data_file = Some(PathBuf::from("/tmp/from-config.json"));

        let store = ledger_store(&config, Some(Path::new("/tmp/flag.json")));
        assert_eq!(store.path(), Path::new("/tmp/flag.json"));

        let store = ledger_store(&config, None);
        assert_eq!(store.path(), Path::new("/tmp/from-config.json"));
    }
}
