//! The state machine: states, transitions and the evaluation protocol.
//!
//! # Key Concepts
//!
//! - **Fsm**: owns states and transitions in declaration order, an optional
//!   symbol table, and the single current-state handle
//! - **Handles**: [`StateId`] and [`TransitionId`] are non-owning indices
//!   into a machine; states and transitions remember their machine by
//!   [`MachineId`] only
//! - **Update**: first matching transition wins, conditions within a
//!   transition are OR-combined, at most one transition fires per tick
//! - **History**: every state change can be recorded for diagnostics

mod fsm;
mod history;
mod id;
mod state;
mod transition;
mod validate;

pub use fsm::Fsm;
pub use history::{TransitionHistory, TransitionRecord};
pub use id::{MachineId, StateId, TransitionId};
pub use state::State;
pub use transition::Transition;
pub use validate::{GraphIssue, GraphValidation};

pub(crate) use validate::unique_names;
