//! Reference driver that owns and ticks one machine.
//!
//! [`Fsm::update`] takes no time parameter. Guards that depend on time read
//! an [`AgentClock`] captured in a function condition instead.

use crate::machine::{Fsm, TransitionId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, monotonically advancing game clock in seconds.
///
/// Clones observe the same time, so a clone can be moved into a condition
/// closure while the agent advances the original.
#[derive(Clone, Debug, Default)]
pub struct AgentClock {
    seconds: Arc<AtomicU64>,
}

impl AgentClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the clock was created.
    pub fn now(&self) -> f64 {
        f64::from_bits(self.seconds.load(Ordering::Acquire))
    }

    /// Move the clock forward. Negative and NaN steps are ignored.
    pub fn advance(&self, elapsed: f64) {
        let step = elapsed.max(0.0);
        let next = self.now() + step;
        self.seconds.store(next.to_bits(), Ordering::Release);
    }
}

/// A named owner of one machine, ticked once per game update.
///
/// # Example
///
/// ```rust
/// use reflex::agent::Agent;
/// use reflex::{Condition, Fsm, State, Transition};
///
/// let mut agent = Agent::new("guard", Fsm::new());
/// let clock = agent.clock();
///
/// let fsm = agent.fsm_mut();
/// let waiting = fsm.add_state(State::new("Waiting"));
/// let bored = fsm.add_state(State::new("Bored"));
/// fsm.add_transition(
///     Transition::new(waiting, bored).when(Condition::function(move || clock.now() >= 5.0)),
/// );
/// fsm.set_start_state(waiting);
/// agent.start();
///
/// agent.update(3.0);
/// assert_eq!(agent.fsm().current_state(), Some(waiting));
/// agent.update(3.0);
/// assert_eq!(agent.fsm().current_state(), Some(bored));
/// ```
#[derive(Debug)]
pub struct Agent {
    name: String,
    fsm: Fsm,
    clock: AgentClock,
}

impl Agent {
    pub fn new(name: impl Into<String>, fsm: Fsm) -> Self {
        Self {
            name: name.into(),
            fsm,
            clock: AgentClock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fsm(&self) -> &Fsm {
        &self.fsm
    }

    pub fn fsm_mut(&mut self) -> &mut Fsm {
        &mut self.fsm
    }

    /// A handle to this agent's clock.
    pub fn clock(&self) -> AgentClock {
        self.clock.clone()
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.now()
    }

    /// Enter the machine's start state.
    pub fn start(&mut self) {
        self.fsm.reset();
    }

    /// Advance the clock by `elapsed` seconds, then update the machine once.
    pub fn update(&mut self, elapsed: f64) -> Option<TransitionId> {
        self.clock.advance(elapsed);
        let fired = self.fsm.update();
        if let Some(transition) = fired {
            tracing::trace!(agent = %self.name, %transition, "agent changed state");
        }
        fired
    }
}

/// Update every agent once, in name order.
///
/// The slice itself keeps its order.
pub fn tick_agents(agents: &mut [Agent], elapsed: f64) {
    let mut order: Vec<usize> = (0..agents.len()).collect();
    order.sort_by(|&a, &b| agents[a].name.cmp(&agents[b].name));
    for index in order {
        agents[index].update(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Condition};
    use crate::machine::{State, Transition};
    use std::sync::Mutex;

    #[test]
    fn clock_is_shared_between_clones() {
        let clock = AgentClock::new();
        let view = clock.clone();

        clock.advance(1.5);
        clock.advance(0.25);

        assert_eq!(view.now(), 1.75);
    }

    #[test]
    fn clock_ignores_negative_steps() {
        let clock = AgentClock::new();
        clock.advance(2.0);
        clock.advance(-1.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn update_ticks_machine_once() {
        let mut agent = Agent::new("a", Fsm::new());
        agent.update(0.016);
        agent.update(0.016);
        assert_eq!(agent.fsm().ticks(), 2);
        assert!((agent.elapsed() - 0.032).abs() < 1e-9);
    }

    #[test]
    fn agents_tick_in_name_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let make = |name: &str| {
            let mut fsm = Fsm::new();
            let s = fsm.add_state(State::new("S"));
            let log = Arc::clone(&order);
            let tag = name.to_string();
            fsm.add_transition(Transition::new(s, s).when(Condition::function(move || {
                log.lock().unwrap().push(tag.clone());
                false
            })));
            fsm.set_current_state(s);
            Agent::new(name, fsm)
        };

        let mut agents = vec![make("zed"), make("amy"), make("max")];
        tick_agents(&mut agents, 0.1);

        assert_eq!(*order.lock().unwrap(), vec!["amy", "max", "zed"]);
        assert!(agents.iter().all(|a| a.elapsed() > 0.0));
    }

    #[test]
    fn ticking_leaves_caller_order_alone() {
        let mut agents = vec![
            Agent::new("late", Fsm::new()),
            Agent::new("early", Fsm::new()),
        ];

        tick_agents(&mut agents, 0.5);

        let names: Vec<&str> = agents.iter().map(Agent::name).collect();
        assert_eq!(names, vec!["late", "early"]);
    }

    #[test]
    fn start_enters_start_state() {
        let mut fsm = Fsm::new();
        fsm.set_symbol_table(crate::core::SymbolTable::new());
        let idle = fsm.add_state(State::new("Idle").on_enter(Action::symbol("awake", true)));
        fsm.set_start_state(idle);

        let mut agent = Agent::new("sentry", fsm);
        agent.start();

        assert_eq!(agent.fsm().current_state(), Some(idle));
        assert!(agent.fsm().symbol_table().unwrap().get_symbol("awake"));
    }
}
