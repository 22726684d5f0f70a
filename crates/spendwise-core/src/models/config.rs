//! Configuration structures for spendwise.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendConfig {
    /// Notification pipeline configuration.
    pub listener: ListenerConfig,

    /// Expense suggestion configuration.
    pub suggestion: SuggestionConfig,

    /// Ledger storage configuration.
    pub ledger: LedgerConfig,
}

/// Notification pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Number of recent notification texts remembered for duplicate
    /// suppression (0 = disabled).
    pub dedup_capacity: usize,

    /// Buffer size of the notification channel.
    pub channel_capacity: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            dedup_capacity: 16,
            channel_capacity: 64,
        }
    }
}

/// Expense suggestion configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// URL scheme of add-expense deep links.
    pub deep_link_scheme: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            deep_link_scheme: "spendwise".to_string(),
        }
    }
}

/// Ledger storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Ledger JSON file. Falls back to the platform data directory.
    pub data_file: Option<PathBuf>,
}

impl SpendConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SpendConfig =
            serde_json::from_str(r#"{"listener": {"dedup_capacity": 4}}"#).unwrap();
        assert_eq!(config.listener.dedup_capacity, 4);
        assert_eq!(config.listener.channel_capacity, 64);
        assert_eq!(config.suggestion.deep_link_scheme, "spendwise");
        assert_eq!(config.ledger.data_file, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SpendConfig::default();
        config.suggestion.deep_link_scheme = "myapp".to_string();
        config.save(&path).unwrap();

        assert_eq!(SpendConfig::from_file(&path).unwrap(), config);
    }
}
