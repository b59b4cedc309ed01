//! Guarded edges between states.

use super::id::{MachineId, StateId};
use crate::core::{Condition, SymbolTable};

/// Directed edge from `start_state` to `end_state`.
///
/// The conditions form an OR group: the transition is satisfied as soon as
/// any one of them checks `true`, tried in list order. A transition with no
/// conditions is never satisfied.
#[derive(Debug, Default)]
pub struct Transition {
    start_state: Option<StateId>,
    end_state: Option<StateId>,
    pub conditions: Vec<Condition>,
    machine: Option<MachineId>,
}

impl Transition {
    pub fn new(start_state: impl Into<Option<StateId>>, end_state: impl Into<Option<StateId>>) -> Self {
        Self {
            start_state: start_state.into(),
            end_state: end_state.into(),
            ..Self::default()
        }
    }

    /// Append a condition to the OR group.
    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    pub fn end_state(&self) -> Option<StateId> {
        self.end_state
    }

    pub fn set_start_state(&mut self, state: impl Into<Option<StateId>>) {
        self.start_state = state.into();
    }

    pub fn set_end_state(&mut self, state: impl Into<Option<StateId>>) {
        self.end_state = state.into();
    }

    pub fn set_states(
        &mut self,
        start_state: impl Into<Option<StateId>>,
        end_state: impl Into<Option<StateId>>,
    ) {
        self.start_state = start_state.into();
        self.end_state = end_state.into();
    }

    /// The machine this transition was added to, if any.
    pub fn machine(&self) -> Option<MachineId> {
        self.machine
    }

    pub(crate) fn attach(&mut self, machine: MachineId) {
        self.machine = Some(machine);
    }

    /// Whether this edge leaves `current`. Absent compares equal to absent.
    pub fn leaves(&self, current: Option<StateId>) -> bool {
        self.start_state == current
    }

    /// Index of the first condition that holds, if any.
    pub fn first_satisfied(&self, symbols: Option<&SymbolTable>) -> Option<usize> {
        self.conditions
            .iter()
            .position(|condition| condition.check(symbols))
    }
}
