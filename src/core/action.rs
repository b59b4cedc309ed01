//! Actions: side effects run when a state is entered, exited or executed.

use super::slot::{ActionSlot, FnSlot, MethodSlot};
use super::symbol::SymbolTable;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Side-effecting operation attached to a [`State`](crate::State).
///
/// Actions are infallible. A symbol action with no table, or a function
/// action with no slot, does nothing.
///
/// # Example
///
/// ```rust
/// use reflex::core::{Action, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// Action::symbol("alert", true).execute(Some(&mut table));
/// assert!(table.get_symbol("alert"));
///
/// // No table: nothing happens.
/// Action::symbol("alert", false).execute(None);
/// ```
#[derive(Debug)]
pub enum Action {
    /// Delegates to a gameplay callback
    Function(FunctionAction),
    /// Writes a value into the symbol table
    Symbol(SymbolAction),
}

impl Action {
    /// Action backed by a closure or free function.
    pub fn function<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action::Function(FunctionAction::new(FnSlot::new(callback)))
    }

    /// Action backed by a method on a shared receiver.
    pub fn method<T: Send + 'static>(receiver: &Arc<Mutex<T>>, method: fn(&mut T)) -> Self {
        Action::Function(FunctionAction::new(MethodSlot::command(receiver, method)))
    }

    /// Action that sets `name` to `value`.
    pub fn symbol(name: impl Into<String>, value: bool) -> Self {
        Action::Symbol(SymbolAction::new(name, value))
    }

    /// Run the action against the owning machine's table, if any.
    pub fn execute(&self, symbols: Option<&mut SymbolTable>) {
        match self {
            Action::Function(action) => action.execute(),
            Action::Symbol(action) => action.execute(symbols),
        }
    }
}

impl From<FunctionAction> for Action {
    fn from(action: FunctionAction) -> Self {
        Action::Function(action)
    }
}

impl From<SymbolAction> for Action {
    fn from(action: SymbolAction) -> Self {
        Action::Symbol(action)
    }
}

/// Action that invokes an [`ActionSlot`].
#[derive(Default)]
pub struct FunctionAction {
    slot: Option<Box<dyn ActionSlot>>,
}

impl FunctionAction {
    pub fn new(slot: impl ActionSlot + 'static) -> Self {
        Self {
            slot: Some(Box::new(slot)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, slot: impl ActionSlot + 'static) {
        self.slot = Some(Box::new(slot));
    }

    pub fn clear_slot(&mut self) {
        self.slot = None;
    }

    pub fn has_slot(&self) -> bool {
        self.slot.is_some()
    }

    pub fn execute(&self) {
        if let Some(slot) = &self.slot {
            slot.execute();
        }
    }
}

impl fmt::Debug for FunctionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionAction")
            .field("has_slot", &self.has_slot())
            .finish()
    }
}

/// Action that writes `value` into the symbol named `symbol`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAction {
    pub symbol: String,
    pub value: bool,
}

impl SymbolAction {
    pub fn new(symbol: impl Into<String>, value: bool) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }

    pub fn execute(&self, symbols: Option<&mut SymbolTable>) {
        match symbols {
            Some(table) => table.set_symbol(&self.symbol, self.value),
            None => {
                tracing::debug!(symbol = %self.symbol, "symbol action has no table, skipping")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn function_action_invokes_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let action = Action::function(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        action.execute(None);
        action.execute(None);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_function_action_is_noop() {
        let mut table = SymbolTable::new();
        let action = Action::Function(FunctionAction::empty());

        action.execute(Some(&mut table));

        assert!(table.is_empty());
    }

    #[test]
    fn function_action_leaves_table_alone() {
        let mut table = SymbolTable::new();
        table.set_symbol("kept", true);

        Action::function(|| {}).execute(Some(&mut table));

        assert_eq!(table.len(), 1);
        assert!(table.get_symbol("kept"));
    }

    #[test]
    fn symbol_action_writes_table() {
        let mut table = SymbolTable::new();

        Action::symbol("door_open", true).execute(Some(&mut table));
        assert!(table.get_symbol("door_open"));

        Action::symbol("door_open", false).execute(Some(&mut table));
        assert!(!table.get_symbol("door_open"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn symbol_action_without_table_is_noop() {
        Action::symbol("anything", true).execute(None);
    }

    #[test]
    fn method_action_mutates_receiver() {
        struct Ammo {
            rounds: u32,
        }

        let ammo = Arc::new(Mutex::new(Ammo { rounds: 3 }));
        let fire = Action::method(&ammo, |a: &mut Ammo| a.rounds -= 1);

        fire.execute(None);
        fire.execute(None);

        assert_eq!(ammo.lock().unwrap().rounds, 1);
    }
}
