//! Graph validation for machines.
//!
//! The evaluation protocol never checks the machine graph: a transition
//! that points at a state the machine does not own is simply never
//! selected. Validation is an opt-in lint that reports every such problem
//! at once, using Stillwater's `Validation` to accumulate issues instead of
//! stopping at the first.

use super::fsm::Fsm;
use super::id::{StateId, TransitionId};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems found in a machine graph
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphIssue {
    #[error("{transition} starts at {state}, which the machine does not own")]
    DanglingStart {
        transition: TransitionId,
        state: StateId,
    },

    #[error("{transition} ends at {state}, which the machine does not own")]
    DanglingEnd {
        transition: TransitionId,
        state: StateId,
    },

    #[error("Start state {0} is not owned by the machine")]
    DanglingStartState(StateId),

    #[error("State name '{0}' is declared more than once")]
    DuplicateStateName(String),

    #[error("Unknown state '{name}' referenced by {context}")]
    UnknownState { name: String, context: String },
}

/// Accumulated result of a validation pass
pub type GraphValidation = Validation<(), NonEmptyVec<GraphIssue>>;

impl Fsm {
    /// Check the graph for dangling handles and duplicate state names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reflex::{Fsm, State, Transition};
    ///
    /// let mut fsm = Fsm::new();
    /// let idle = fsm.add_state(State::new("Idle"));
    /// let walk = fsm.add_state(State::new("Walk"));
    /// fsm.add_transition(Transition::new(idle, walk));
    ///
    /// assert!(fsm.validate().is_success());
    /// ```
    pub fn validate(&self) -> GraphValidation {
        let mut checks: Vec<GraphValidation> = Vec::new();

        for (index, transition) in self.transitions().iter().enumerate() {
            let id = TransitionId::new(index);
            if let Some(state) = transition.start_state() {
                checks.push(self.owned(state, || GraphIssue::DanglingStart {
                    transition: id,
                    state,
                }));
            }
            if let Some(state) = transition.end_state() {
                checks.push(self.owned(state, || GraphIssue::DanglingEnd {
                    transition: id,
                    state,
                }));
            }
        }

        if let Some(start) = self.start_state() {
            checks.push(self.owned(start, || GraphIssue::DanglingStartState(start)));
        }

        checks.extend(unique_names(self.states().iter().map(|s| s.name())));

        Validation::all_vec(checks).map(|_| ())
    }

    fn owned(&self, state: StateId, issue: impl FnOnce() -> GraphIssue) -> GraphValidation {
        if self.state(state).is_some() {
            Validation::success(())
        } else {
            Validation::fail(issue())
        }
    }
}

/// One failed check per name that appears more than once.
pub(crate) fn unique_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<GraphValidation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut checks = Vec::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            checks.push(Validation::fail(GraphIssue::DuplicateStateName(
                name.to_string(),
            )));
        }
    }
    checks
}
