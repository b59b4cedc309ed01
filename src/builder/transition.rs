//! Builder for constructing transitions by state name.

use crate::core::{Condition, SymbolCondition};
use std::sync::{Arc, Mutex};

/// Builder for a transition whose endpoints are named, not yet resolved.
///
/// Names are resolved against the machine's states when the owning
/// [`FsmBuilder`](crate::builder::FsmBuilder) builds.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    pub(crate) from: Option<String>,
    pub(crate) to: Option<String>,
    pub(crate) conditions: Vec<Condition>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Append a prebuilt condition.
    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Append a symbol condition.
    pub fn when_symbol(self, symbol: impl Into<String>, expected: bool) -> Self {
        self.when(SymbolCondition::new(symbol).expecting(expected))
    }

    /// Append a closure condition.
    pub fn when_fn<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.when(Condition::function(predicate))
    }

    /// Append a method condition on a shared receiver.
    pub fn when_method<T: Send + 'static>(
        self,
        receiver: &Arc<Mutex<T>>,
        method: fn(&T) -> bool,
    ) -> Self {
        self.when(Condition::method(receiver, method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_conditions_in_order() {
        let builder = TransitionBuilder::new()
            .from("Idle")
            .to("Walk")
            .when_symbol("moving", true)
            .when_fn(|| false)
            .when(Condition::symbol("running", false));

        assert_eq!(builder.from.as_deref(), Some("Idle"));
        assert_eq!(builder.to.as_deref(), Some("Walk"));
        assert_eq!(builder.conditions.len(), 3);
        assert!(matches!(
            &builder.conditions[0],
            Condition::Symbol(SymbolCondition { symbol, expected: true }) if symbol == "moving"
        ));
        assert!(matches!(builder.conditions[1], Condition::Function(_)));
    }

    #[test]
    fn default_builder_is_empty() {
        let builder = TransitionBuilder::default();
        assert!(builder.from.is_none());
        assert!(builder.to.is_none());
        assert!(builder.conditions.is_empty());
    }

    #[test]
    fn method_condition_follows_receiver_through_build() {
        use crate::builder::FsmBuilder;
        use crate::machine::State;

        struct Ears {
            heard: bool,
        }

        impl Ears {
            fn heard(&self) -> bool {
                self.heard
            }
        }

        let ears = Arc::new(Mutex::new(Ears { heard: false }));
        let mut fsm = FsmBuilder::new()
            .state(State::new("Guard"))
            .state(State::new("Search"))
            .start("Guard")
            .transition(
                TransitionBuilder::new()
                    .from("Guard")
                    .to("Search")
                    .when_method(&ears, Ears::heard),
            )
            .build()
            .unwrap();
        let guard = fsm.state_by_name("Guard").unwrap();
        let search = fsm.state_by_name("Search").unwrap();

        fsm.reset();
        assert!(fsm.update().is_none());

        ears.lock().unwrap().heard = true;
        assert!(fsm.update().is_some());
        assert_eq!(fsm.current_state(), Some(search));

        drop(ears);
        fsm.set_current_state(guard);
        assert!(fsm.update().is_none());
        assert_eq!(fsm.current_state(), Some(guard));
    }
}
