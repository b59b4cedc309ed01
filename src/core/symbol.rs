//! Named boolean variables shared by the conditions and actions of one machine.
//!
//! A [`SymbolTable`] is the blackboard of a single [`Fsm`](crate::Fsm).
//! Symbol actions write to it, symbol conditions read from it. Reading a
//! name that was never written yields `false`, so callers cannot tell an
//! unset symbol from a cleared one through [`SymbolTable::get_symbol`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named boolean.
///
/// Identity is by name: two symbols with the same name occupy the same
/// slot of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Key of the symbol within its table
    pub name: String,
    /// Current value
    pub value: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Mapping from symbol name to [`Symbol`], unique by name.
///
/// # Example
///
/// ```rust
/// use reflex::core::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// table.set_symbol("moving", true);
/// table.set_symbol("moving", true);
///
/// assert_eq!(table.len(), 1);
/// assert!(table.get_symbol("moving"));
/// assert!(!table.get_symbol("missing"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol`, replacing any entry with the same name.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    /// Remove the entry for `name`. Removing an absent name does nothing.
    pub fn remove_symbol(&mut self, name: &str) {
        self.symbols.remove(name);
    }

    /// Value stored under `name`, or `false` when there is no such entry.
    pub fn get_symbol(&self, name: &str) -> bool {
        self.symbols.get(name).is_some_and(|symbol| symbol.value)
    }

    /// Create or overwrite the entry for `name`.
    pub fn set_symbol(&mut self, name: &str, value: bool) {
        match self.symbols.get_mut(name) {
            Some(symbol) => symbol.value = value,
            None => self.add_symbol(Symbol::new(name, value)),
        }
    }

    /// Whether an entry named `name` exists, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// The stored symbol, distinguishing "unset" from "false".
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Iterate over all symbols in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}

impl FromIterator<Symbol> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for symbol in iter {
            table.add_symbol(symbol);
        }
        table
    }
}

impl<'a> FromIterator<(&'a str, bool)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| Symbol::new(name, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbol_reads_false() {
        let table = SymbolTable::new();
        assert!(!table.get_symbol("missing"));
        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn set_symbol_overwrites_instead_of_duplicating() {
        let mut table = SymbolTable::new();
        table.set_symbol("flag", true);
        table.set_symbol("flag", true);

        assert_eq!(table.len(), 1);
        assert!(table.get_symbol("flag"));

        table.set_symbol("flag", false);
        assert_eq!(table.len(), 1);
        assert!(!table.get_symbol("flag"));
    }

    #[test]
    fn add_symbol_replaces_existing_entry() {
        let mut table = SymbolTable::new();
        table.add_symbol(Symbol::new("alert", false));
        table.add_symbol(Symbol::new("alert", true));

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("alert"), Some(&Symbol::new("alert", true)));
    }

    #[test]
    fn remove_symbol_is_noop_for_absent_name() {
        let mut table = SymbolTable::new();
        table.set_symbol("a", true);

        table.remove_symbol("b");
        assert_eq!(table.len(), 1);

        table.remove_symbol("a");
        assert!(table.is_empty());
        assert!(!table.get_symbol("a"));
    }

    #[test]
    fn stored_false_is_distinct_from_unset() {
        let mut table = SymbolTable::new();
        table.set_symbol("cleared", false);

        assert!(table.contains("cleared"));
        assert!(!table.contains("unset"));
        assert_eq!(table.get_symbol("cleared"), table.get_symbol("unset"));
    }

    #[test]
    fn collects_from_pairs() {
        let table: SymbolTable = [("a", true), ("b", false), ("a", false)]
            .into_iter()
            .collect();

        assert_eq!(table.len(), 2);
        assert!(!table.get_symbol("a"));
        assert!(table.contains("b"));
    }

    #[test]
    fn table_serializes_to_json() {
        let mut table = SymbolTable::new();
        table.set_symbol("armed", true);

        let json = serde_json::to_string(&table).unwrap();
        let restored: SymbolTable = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, table);
        assert!(restored.get_symbol("armed"));
    }
}
