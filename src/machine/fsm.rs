//! The state machine and its evaluation protocol.

use super::history::{TransitionHistory, TransitionRecord};
use super::id::{MachineId, StateId, TransitionId};
use super::state::State;
use super::transition::Transition;
use crate::config::MachineConfig;
use crate::core::{Action, SymbolTable};
use chrono::Utc;

/// Finite state machine owning its states, transitions and symbol table.
///
/// A new machine has no current state. Nothing runs until a driver calls
/// [`Fsm::set_current_state`] (usually with the start state) and then
/// [`Fsm::update`] once per tick.
///
/// # Example
///
/// ```rust
/// use reflex::{Condition, Fsm, State, SymbolTable, Transition};
///
/// let mut fsm = Fsm::new();
/// let idle = fsm.add_state(State::new("Idle"));
/// let walking = fsm.add_state(State::new("Walking"));
/// fsm.add_transition(Transition::new(idle, walking).when(Condition::symbol("moving", true)));
/// fsm.set_symbol_table(SymbolTable::new());
/// fsm.set_current_state(idle);
///
/// assert!(fsm.update().is_none());
///
/// fsm.symbol_table_mut().unwrap().set_symbol("moving", true);
/// assert!(fsm.update().is_some());
/// assert_eq!(fsm.current_state(), Some(walking));
/// ```
#[derive(Debug)]
pub struct Fsm {
    id: MachineId,
    states: Vec<State>,
    transitions: Vec<Transition>,
    start_state: Option<StateId>,
    current_state: Option<StateId>,
    symbols: Option<SymbolTable>,
    history: TransitionHistory,
    config: MachineConfig,
    ticks: u64,
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new()
    }
}

impl Fsm {
    /// Create an empty machine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an empty machine. Symbols listed in `config` seed its table.
    pub fn with_config(config: MachineConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => TransitionHistory::bounded(limit),
            None => TransitionHistory::new(),
        };
        Self {
            id: MachineId::new(),
            states: Vec::new(),
            transitions: Vec::new(),
            start_state: None,
            current_state: None,
            symbols: config.symbol_table(),
            history,
            config,
            ticks: 0,
        }
    }

    pub fn id(&self) -> MachineId {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Take ownership of `state` and return its handle.
    pub fn add_state(&mut self, mut state: State) -> StateId {
        let id = StateId::new(self.states.len());
        state.attach(self.id, id);
        self.states.push(state);
        id
    }

    /// Take ownership of `transition` and return its handle.
    ///
    /// The transition's endpoints are not checked; see [`Fsm::validate`].
    pub fn add_transition(&mut self, mut transition: Transition) -> TransitionId {
        let id = TransitionId::new(self.transitions.len());
        transition.attach(self.id);
        self.transitions.push(transition);
        id
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id.index())
    }

    /// First state declared with `name`.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|state| state.name() == name)
            .map(StateId::new)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id.index())
    }

    pub fn transition_mut(&mut self, id: TransitionId) -> Option<&mut Transition> {
        self.transitions.get_mut(id.index())
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    pub fn set_start_state(&mut self, state: impl Into<Option<StateId>>) {
        self.start_state = state.into();
    }

    /// Make `state` the start state when `is_start` is true.
    ///
    /// Passing `false` does nothing; use [`Fsm::set_start_state`] with
    /// `None` to clear the start state.
    pub fn mark_start_state(&mut self, state: StateId, is_start: bool) {
        if is_start && self.state(state).is_some() {
            self.start_state = Some(state);
        }
    }

    pub fn is_start_state(&self, state: StateId) -> bool {
        self.state(state)
            .is_some_and(|candidate| candidate.is_start_state(self))
    }

    /// True for every state this machine owns.
    pub fn is_end_state(&self, state: StateId) -> bool {
        self.state(state).is_some_and(State::is_end_state)
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.current_state
    }

    /// The current state's data, if the current handle resolves.
    pub fn current(&self) -> Option<&State> {
        self.current_state.and_then(|id| self.state(id))
    }

    pub fn symbol_table(&self) -> Option<&SymbolTable> {
        self.symbols.as_ref()
    }

    pub fn symbol_table_mut(&mut self) -> Option<&mut SymbolTable> {
        self.symbols.as_mut()
    }

    /// Attach a table, or detach it with `None`.
    pub fn set_symbol_table(&mut self, table: impl Into<Option<SymbolTable>>) {
        self.symbols = table.into();
    }

    /// Number of `update` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Switch to `state`.
    ///
    /// Runs the exit actions of the current state, makes `state` current,
    /// then runs its enter actions. Switching to the state that is already
    /// current still runs both lists.
    pub fn set_current_state(&mut self, state: impl Into<Option<StateId>>) {
        self.change_state(state.into(), None);
    }

    /// Switch to the start state.
    pub fn reset(&mut self) {
        self.change_state(self.start_state, None);
    }

    /// Evaluate transitions once and fire at most one.
    ///
    /// Transitions are tried in declaration order. A transition whose start
    /// state is not the current state is skipped without evaluating its
    /// conditions. For the others, conditions are tried in order and the
    /// first one that holds fires the transition; nothing else is evaluated
    /// this tick.
    ///
    /// Returns the transition that fired, if any.
    pub fn update(&mut self) -> Option<TransitionId> {
        self.ticks += 1;
        let current = self.current_state;
        let symbols = self.symbols.as_ref();

        let (id, end_state) = self
            .transitions
            .iter()
            .enumerate()
            .find_map(|(index, transition)| {
                if !transition.leaves(current) {
                    return None;
                }
                let condition = transition.first_satisfied(symbols);
                tracing::trace!(
                    machine = %self.id,
                    transition = index,
                    ?condition,
                    "evaluated transition"
                );
                condition.map(|_| (TransitionId::new(index), transition.end_state()))
            })?;

        tracing::debug!(
            machine = %self.id,
            transition = %id,
            from = self.state_name(current),
            to = self.state_name(end_state),
            "transition fired"
        );
        self.change_state(end_state, Some(id));
        Some(id)
    }

    /// Run the current state's execute actions in order.
    ///
    /// `update` never does this on its own.
    pub fn execute_current(&mut self) {
        if let Some(state) = self.current_state.and_then(|id| self.states.get(id.index())) {
            run_actions(&state.execute_actions, &mut self.symbols);
        }
    }

    fn change_state(&mut self, next: Option<StateId>, via: Option<TransitionId>) {
        let previous = self.current_state;

        if let Some(state) = previous.and_then(|id| self.states.get(id.index())) {
            run_actions(&state.exit_actions, &mut self.symbols);
        }

        self.current_state = next;

        if let Some(state) = next.and_then(|id| self.states.get(id.index())) {
            run_actions(&state.enter_actions, &mut self.symbols);
        }

        if self.config.record_history {
            self.history.record(TransitionRecord {
                from: previous,
                to: next,
                via,
                tick: self.ticks,
                timestamp: Utc::now(),
            });
        }
    }

    fn state_name(&self, id: Option<StateId>) -> &str {
        match id.and_then(|id| self.state(id)) {
            Some(state) => state.name(),
            None => "<none>",
        }
    }
}

fn run_actions(actions: &[Action], symbols: &mut Option<SymbolTable>) {
    for action in actions {
        action.execute(symbols.as_mut());
    }
}
