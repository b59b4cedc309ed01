//! Reflex: a deterministic finite state machine engine for game AI.
//!
//! A machine owns a list of states, a list of guarded transitions and an
//! optional table of named booleans. A driver calls [`Fsm::update`] once
//! per tick, and the machine moves along at most one transition.
//!
//! # Core Concepts
//!
//! - **State**: a node with ordered enter, exit and execute actions
//! - **Transition**: an edge guarded by an OR-group of conditions
//! - **Condition / Action**: either backed by the symbol table or by a
//!   gameplay callback slot
//! - **Update**: transitions are tried in declaration order and the first
//!   satisfied one fires; exit actions of the old state run before enter
//!   actions of the new one
//!
//! # Example
//!
//! ```rust
//! use reflex::builder::{symbol_transition, FsmBuilder};
//! use reflex::State;
//!
//! let mut fsm = FsmBuilder::new()
//!     .state(State::new("Idle"))
//!     .state(State::new("Walking"))
//!     .start("Idle")
//!     .symbol("moving", false)
//!     .transition(symbol_transition("Idle", "Walking", "moving", true))
//!     .build()
//!     .unwrap();
//!
//! fsm.reset();
//! fsm.update();
//! assert_eq!(fsm.current_state(), fsm.state_by_name("Idle"));
//!
//! fsm.symbol_table_mut().unwrap().set_symbol("moving", true);
//! fsm.update();
//! assert_eq!(fsm.current_state(), fsm.state_by_name("Walking"));
//! ```

pub mod agent;
pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::config::{ConfigError, MachineConfig};
pub use crate::core::{Action, Condition, Symbol, SymbolTable};
pub use crate::machine::{Fsm, MachineId, State, StateId, Transition, TransitionId};
