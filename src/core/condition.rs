//! Conditions: boolean predicates that guard transitions.
//!
//! A condition is evaluated against the optional symbol table of the machine
//! that owns it. Evaluating a condition that has no machine, or whose
//! machine has no table, is the same as evaluating against `None`.

use super::slot::{ConditionSlot, FnSlot, MethodSlot};
use super::symbol::SymbolTable;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Guard predicate attached to a [`Transition`](crate::Transition).
///
/// Conditions never mutate the machine. Anything they can observe is either
/// the symbol table (read-only) or state captured by a callback slot.
///
/// # Example
///
/// ```rust
/// use reflex::core::{Condition, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.set_symbol("moving", true);
///
/// let moving = Condition::symbol("moving", true);
/// let still = Condition::symbol("moving", false);
///
/// assert!(moving.check(Some(&table)));
/// assert!(!still.check(Some(&table)));
/// assert!(!moving.check(None));
/// ```
#[derive(Debug)]
pub enum Condition {
    /// Delegates to a gameplay callback
    Function(FunctionCondition),
    /// Compares a symbol with an expected value
    Symbol(SymbolCondition),
}

impl Condition {
    /// Condition backed by a closure or free function.
    pub fn function<F>(callback: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition::Function(FunctionCondition::new(FnSlot::new(callback)))
    }

    /// Condition backed by a predicate method on a shared receiver.
    pub fn method<T: Send + 'static>(receiver: &Arc<Mutex<T>>, method: fn(&T) -> bool) -> Self {
        Condition::Function(FunctionCondition::new(MethodSlot::predicate(
            receiver, method,
        )))
    }

    /// Condition that holds when `name` reads as `expected`.
    pub fn symbol(name: impl Into<String>, expected: bool) -> Self {
        Condition::Symbol(SymbolCondition::new(name).expecting(expected))
    }

    /// Evaluate the condition.
    ///
    /// `symbols` is the owning machine's table, if any.
    pub fn check(&self, symbols: Option<&SymbolTable>) -> bool {
        match self {
            Condition::Function(condition) => condition.check(),
            Condition::Symbol(condition) => condition.check(symbols),
        }
    }
}

impl From<FunctionCondition> for Condition {
    fn from(condition: FunctionCondition) -> Self {
        Condition::Function(condition)
    }
}

impl From<SymbolCondition> for Condition {
    fn from(condition: SymbolCondition) -> Self {
        Condition::Symbol(condition)
    }
}

/// Condition that invokes a [`ConditionSlot`].
///
/// An empty slot always reads `false`.
#[derive(Default)]
pub struct FunctionCondition {
    slot: Option<Box<dyn ConditionSlot>>,
}

impl FunctionCondition {
    pub fn new(slot: impl ConditionSlot + 'static) -> Self {
        Self {
            slot: Some(Box::new(slot)),
        }
    }

    /// A condition with no slot attached.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, slot: impl ConditionSlot + 'static) {
        self.slot = Some(Box::new(slot));
    }

    pub fn clear_slot(&mut self) {
        self.slot = None;
    }

    pub fn has_slot(&self) -> bool {
        self.slot.is_some()
    }

    pub fn check(&self) -> bool {
        self.slot.as_ref().is_some_and(|slot| slot.check())
    }
}

impl fmt::Debug for FunctionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCondition")
            .field("has_slot", &self.has_slot())
            .finish()
    }
}

/// Condition that compares a symbol with an expected value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCondition {
    pub symbol: String,
    pub expected: bool,
}

impl SymbolCondition {
    /// Condition on `symbol`, expecting `true`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            expected: true,
        }
    }

    pub fn expecting(mut self, expected: bool) -> Self {
        self.expected = expected;
        self
    }

    /// `false` when there is no table; otherwise whether the symbol reads as
    /// expected. An unset symbol reads `false`.
    pub fn check(&self, symbols: Option<&SymbolTable>) -> bool {
        let Some(table) = symbols else {
            tracing::debug!(symbol = %self.symbol, "symbol condition has no table, reading false");
            return false;
        };
        table.get_symbol(&self.symbol) == self.expected
    }
}
