//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for wiring machines by
//! state name, so setup code never handles raw state handles.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::FsmBuilder;
pub use transition::TransitionBuilder;

/// Create a transition that fires when `symbol` reads as `expected`.
///
/// # Example
///
/// ```
/// use reflex::builder::{symbol_transition, FsmBuilder};
/// use reflex::State;
///
/// let fsm = FsmBuilder::new()
///     .state(State::new("Idle"))
///     .state(State::new("Alert"))
///     .transition(symbol_transition("Idle", "Alert", "noise", true))
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.transitions()[0].conditions.len(), 1);
/// ```
pub fn symbol_transition(
    from: impl Into<String>,
    to: impl Into<String>,
    symbol: impl Into<String>,
    expected: bool,
) -> TransitionBuilder {
    TransitionBuilder::new()
        .from(from)
        .to(to)
        .when_symbol(symbol, expected)
}

/// Create a transition guarded by a closure.
///
/// # Example
///
/// ```
/// use reflex::builder::guarded_transition;
///
/// let transition = guarded_transition("Patrol", "Rest", || false);
/// ```
pub fn guarded_transition<F>(from: impl Into<String>, to: impl Into<String>, guard: F) -> TransitionBuilder
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new().from(from).to(to).when_fn(guard)
}
