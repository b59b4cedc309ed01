//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::config::MachineConfig;
use crate::core::SymbolTable;
use crate::machine::{unique_names, Fsm, GraphIssue, GraphValidation, State, StateId, Transition};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// Builder for constructing machines with a fluent API.
///
/// States are referred to by name. Every name problem in the graph is
/// collected and reported together by [`FsmBuilder::build`].
///
/// # Example
///
/// ```rust
/// use reflex::builder::{FsmBuilder, TransitionBuilder};
/// use reflex::State;
///
/// let fsm = FsmBuilder::new()
///     .state(State::new("Idle"))
///     .state(State::new("Walking"))
///     .start("Idle")
///     .symbol("moving", true)
///     .transition(
///         TransitionBuilder::new()
///             .from("Idle")
///             .to("Walking")
///             .when_symbol("moving", true),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.states().len(), 2);
/// assert!(fsm.current_state().is_none());
/// ```
#[derive(Debug, Default)]
pub struct FsmBuilder {
    config: MachineConfig,
    states: Vec<State>,
    transitions: Vec<TransitionBuilder>,
    start: Option<String>,
    symbols: Option<SymbolTable>,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for the machine. Configured symbols are merged under
    /// any set on the builder directly.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state. Declaration order is kept.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Name the start state.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Attach a symbol table, replacing any symbols set so far.
    pub fn symbols(mut self, table: SymbolTable) -> Self {
        self.symbols = Some(table);
        self
    }

    /// Set one symbol, creating the table if needed.
    pub fn symbol(mut self, name: &str, value: bool) -> Self {
        self.symbols
            .get_or_insert_with(SymbolTable::new)
            .set_symbol(name, value);
        self
    }

    /// Add a transition. Declaration order is evaluation order.
    pub fn transition(mut self, builder: TransitionBuilder) -> Self {
        self.transitions.push(builder);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, builders: impl IntoIterator<Item = TransitionBuilder>) -> Self {
        self.transitions.extend(builders);
        self
    }

    /// Build the machine.
    ///
    /// Fails on the first transition missing an endpoint. Otherwise all
    /// unknown or duplicated state names are reported together.
    pub fn build(self) -> Result<Fsm, BuildError> {
        for (index, transition) in self.transitions.iter().enumerate() {
            if transition.from.is_none() {
                return Err(BuildError::MissingFromState { index });
            }
            if transition.to.is_none() {
                return Err(BuildError::MissingToState { index });
            }
        }
        if self.config.enter_start_on_build && self.start.is_none() {
            return Err(BuildError::MissingStartState);
        }

        let mut checks: Vec<GraphValidation> = Vec::new();
        checks.extend(unique_names(self.states.iter().map(State::name)));

        let (start, edges) = {
            let mut index: HashMap<&str, StateId> = HashMap::new();
            for (position, state) in self.states.iter().enumerate() {
                index.entry(state.name()).or_insert(StateId::new(position));
            }

            let start = self
                .start
                .as_deref()
                .and_then(|name| resolve(&index, name, "the start state", &mut checks));

            let mut edges = Vec::with_capacity(self.transitions.len());
            for (position, transition) in self.transitions.iter().enumerate() {
                let context = format!("transition {position}");
                let from = transition
                    .from
                    .as_deref()
                    .and_then(|name| resolve(&index, name, &context, &mut checks));
                let to = transition
                    .to
                    .as_deref()
                    .and_then(|name| resolve(&index, name, &context, &mut checks));
                edges.push((from, to));
            }
            (start, edges)
        };

        if let Validation::Failure(issues) = Validation::all_vec(checks) {
            return Err(BuildError::InvalidGraph(issues.iter().cloned().collect()));
        }

        let mut symbols = self.config.symbol_table();
        if let Some(table) = self.symbols {
            let merged = symbols.get_or_insert_with(SymbolTable::new);
            for symbol in table.iter() {
                merged.add_symbol(symbol.clone());
            }
        }
        let enter_start = self.config.enter_start_on_build;

        let mut fsm = Fsm::with_config(self.config);
        fsm.set_symbol_table(symbols);
        for state in self.states {
            fsm.add_state(state);
        }
        for (builder, (from, to)) in self.transitions.into_iter().zip(edges) {
            let mut transition = Transition::new(from, to);
            transition.conditions = builder.conditions;
            fsm.add_transition(transition);
        }
        fsm.set_start_state(start);

        tracing::debug!(
            machine = %fsm.id(),
            states = fsm.states().len(),
            transitions = fsm.transitions().len(),
            "built machine"
        );

        if enter_start {
            fsm.reset();
        }
        Ok(fsm)
    }
}

fn resolve(
    index: &HashMap<&str, StateId>,
    name: &str,
    context: &str,
    checks: &mut Vec<GraphValidation>,
) -> Option<StateId> {
    let found = index.get(name).copied();
    if found.is_none() {
        checks.push(Validation::fail(GraphIssue::UnknownState {
            name: name.to_string(),
            context: context.to_string(),
        }));
    }
    found
}
