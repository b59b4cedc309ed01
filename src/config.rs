//! Machine configuration.
//!
//! Options that shape bookkeeping around the evaluation protocol. None of
//! them change how `update` selects a transition.

use crate::core::SymbolTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default number of state changes kept in a machine's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid configuration JSON
    #[error("Failed to parse machine config: {0}")]
    Parse(String),
}

/// Options for one machine.
///
/// Every field has a default, so partial documents are accepted.
///
/// # Example
///
/// ```rust
/// use reflex::MachineConfig;
///
/// let config = MachineConfig::from_json_str(r#"{
///     "history_limit": 8,
///     "symbols": { "moving": false }
/// }"#).unwrap();
///
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(8));
/// assert!(!config.enter_start_on_build);
/// assert!(config.symbol_table().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Record state changes in the machine's history
    pub record_history: bool,

    /// Maximum number of history records; `None` keeps everything
    pub history_limit: Option<usize>,

    /// Enter the start state as soon as the builder finishes
    pub enter_start_on_build: bool,

    /// Symbols to seed the machine's table with
    pub symbols: BTreeMap<String, bool>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            enter_start_on_build: false,
            symbols: BTreeMap::new(),
        }
    }
}

impl MachineConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Table seeded from `symbols`, or `None` when no symbols are configured.
    pub fn symbol_table(&self) -> Option<SymbolTable> {
        if self.symbols.is_empty() {
            return None;
        }
        let mut table = SymbolTable::new();
        for (name, value) in &self.symbols {
            table.set_symbol(name, *value);
        }
        Some(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_record_bounded_history() {
        let config = MachineConfig::default();
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
        assert!(!config.enter_start_on_build);
        assert!(config.symbol_table().is_none());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = MachineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn null_limit_means_unbounded() {
        let config = MachineConfig::from_json_str(r#"{"history_limit": null}"#).unwrap();
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn symbols_seed_table() {
        let config =
            MachineConfig::from_json_str(r#"{"symbols": {"alert": true, "armed": false}}"#)
                .unwrap();

        let table = config.symbol_table().unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get_symbol("alert"));
        assert!(table.contains("armed"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = MachineConfig::from_json_str(r#"{"record_history": "yes"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_serializes_roundtrip() {
        let mut config = MachineConfig::default();
        config.enter_start_on_build = true;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MachineConfig::from_json_str(&json).unwrap(), config);
    }
}
