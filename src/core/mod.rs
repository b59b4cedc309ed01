//! Leaf building blocks of a machine.
//!
//! This module contains everything a state or transition is made of:
//! - The per-machine [`SymbolTable`] of named booleans
//! - [`Condition`]s that guard transitions
//! - [`Action`]s that run on enter, exit and execute
//! - Callback slots, the seam through which gameplay code plugs in
//!
//! None of these types know about [`Fsm`](crate::Fsm). The machine hands
//! them its symbol table at evaluation time.

mod action;
mod condition;
mod slot;
mod symbol;

pub use action::{Action, FunctionAction, SymbolAction};
pub use condition::{Condition, FunctionCondition, SymbolCondition};
pub use slot::{ActionSlot, ConditionSlot, FnSlot, MethodSlot};
pub use symbol::{Symbol, SymbolTable};
