//! Machine states and their action lists.

use super::fsm::Fsm;
use super::id::{MachineId, StateId};
use crate::core::Action;

/// A node of the machine with three ordered action lists.
///
/// - `enter_actions` run when the machine switches into this state
/// - `exit_actions` run when the machine switches out of it
/// - `execute_actions` are never run by [`Fsm::update`]; drivers that want
///   per-tick behavior call [`Fsm::execute_current`]
///
/// List order is the execution order.
///
/// # Example
///
/// ```rust
/// use reflex::{Action, Fsm, State};
///
/// let mut fsm = Fsm::new();
/// let idle = fsm.add_state(
///     State::new("Idle")
///         .on_enter(Action::symbol("resting", true))
///         .on_exit(Action::symbol("resting", false)),
/// );
///
/// let state = fsm.state(idle).unwrap();
/// assert_eq!(state.name(), "Idle");
/// assert_eq!(state.enter_actions.len(), 1);
/// assert!(state.is_end_state());
/// ```
#[derive(Debug)]
pub struct State {
    name: String,
    pub enter_actions: Vec<Action>,
    pub exit_actions: Vec<Action>,
    pub execute_actions: Vec<Action>,
    machine: Option<MachineId>,
    id: Option<StateId>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enter_actions: Vec::new(),
            exit_actions: Vec::new(),
            execute_actions: Vec::new(),
            machine: None,
            id: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an enter action.
    pub fn on_enter(mut self, action: impl Into<Action>) -> Self {
        self.enter_actions.push(action.into());
        self
    }

    /// Append an exit action.
    pub fn on_exit(mut self, action: impl Into<Action>) -> Self {
        self.exit_actions.push(action.into());
        self
    }

    /// Append an execute action.
    pub fn on_execute(mut self, action: impl Into<Action>) -> Self {
        self.execute_actions.push(action.into());
        self
    }

    /// The machine this state was added to, if any.
    pub fn machine(&self) -> Option<MachineId> {
        self.machine
    }

    /// This state's handle within its machine, if it has been added to one.
    pub fn id(&self) -> Option<StateId> {
        self.id
    }

    pub(crate) fn attach(&mut self, machine: MachineId, id: StateId) {
        self.machine = Some(machine);
        self.id = Some(id);
    }

    /// Whether `fsm` owns this state and has it as its start state.
    pub fn is_start_state(&self, fsm: &Fsm) -> bool {
        match (self.machine, self.id) {
            (Some(machine), Some(id)) => machine == fsm.id() && fsm.start_state() == Some(id),
            _ => false,
        }
    }

    /// True for every state that belongs to a machine.
    ///
    /// No terminal-state analysis is done; any attached state reports itself
    /// as an end state.
    pub fn is_end_state(&self) -> bool {
        self.machine.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_state_has_no_machine() {
        let state = State::new("Loose");
        let fsm = Fsm::new();

        assert!(state.machine().is_none());
        assert!(state.id().is_none());
        assert!(!state.is_end_state());
        assert!(!state.is_start_state(&fsm));
    }

    #[test]
    fn action_lists_keep_insertion_order() {
        let state = State::new("Guard")
            .on_enter(Action::symbol("a", true))
            .on_enter(Action::symbol("b", true))
            .on_exit(Action::symbol("c", true))
            .on_execute(Action::symbol("d", true));

        let names: Vec<&str> = state
            .enter_actions
            .iter()
            .map(|action| match action {
                Action::Symbol(symbol) => symbol.symbol.as_str(),
                Action::Function(_) => "fn",
            })
            .collect();

        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(state.exit_actions.len(), 1);
        assert_eq!(state.execute_actions.len(), 1);
    }

    #[test]
    fn attached_state_is_end_state() {
        let mut fsm = Fsm::new();
        let id = fsm.add_state(State::new("Any"));
        let state = fsm.state(id).unwrap();

        assert_eq!(state.machine(), Some(fsm.id()));
        assert_eq!(state.id(), Some(id));
        assert!(state.is_end_state());
    }

    #[test]
    fn start_state_is_checked_against_owner() {
        let mut fsm = Fsm::new();
        let idle = fsm.add_state(State::new("Idle"));
        let walk = fsm.add_state(State::new("Walk"));
        fsm.set_start_state(idle);

        assert!(fsm.state(idle).unwrap().is_start_state(&fsm));
        assert!(!fsm.state(walk).unwrap().is_start_state(&fsm));

        let mut other = Fsm::new();
        other.add_state(State::new("Idle"));
        other.set_start_state(idle);
        assert!(!fsm.state(idle).unwrap().is_start_state(&other));
    }
}
