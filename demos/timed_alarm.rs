//! Timed Alarm State Machine
//!
//! This example shows time-driven transitions. The machine itself has no
//! notion of time; conditions close over the agent's clock instead.
//!
//! Key concepts:
//! - Agent-owned machines ticked with elapsed time
//! - Function conditions reading a shared clock
//! - Method slots bound to a gameplay object
//! - Execute actions run by the driver, not by update
//!
//! Run with: cargo run --example timed_alarm

use reflex::agent::{tick_agents, Agent};
use reflex::{Action, Condition, Fsm, State, Transition};
use std::sync::{Arc, Mutex};

struct Siren {
    blasts: u32,
}

impl Siren {
    fn blast(&mut self) {
        self.blasts += 1;
    }

    fn exhausted(&self) -> bool {
        self.blasts >= 3
    }
}

fn alarm_agent(name: &str, delay: f64, siren: &Arc<Mutex<Siren>>) -> Agent {
    let mut agent = Agent::new(name, Fsm::new());
    let clock = agent.clock();

    let fsm = agent.fsm_mut();
    let armed = fsm.add_state(State::new("Armed"));
    let ringing = fsm.add_state(State::new("Ringing").on_execute(Action::method(siren, Siren::blast)));
    let silent = fsm.add_state(State::new("Silent"));

    fsm.add_transition(
        Transition::new(armed, ringing).when(Condition::function(move || clock.now() >= delay)),
    );
    fsm.add_transition(Transition::new(ringing, silent).when(Condition::method(siren, Siren::exhausted)));
    fsm.set_start_state(armed);

    agent.start();
    agent
}

fn main() {
    println!("=== Timed Alarm State Machine ===\n");

    let siren = Arc::new(Mutex::new(Siren { blasts: 0 }));
    let mut agents = vec![
        alarm_agent("late", 2.0, &siren),
        alarm_agent("early", 0.5, &siren),
    ];

    for frame in 0..8 {
        tick_agents(&mut agents, 0.5);
        for agent in agents.iter_mut() {
            agent.fsm_mut().execute_current();
            let state = agent.fsm().current().map(State::name).unwrap_or("<none>");
            println!("frame {frame} t={:.1}s {:>5}: {state}", agent.elapsed(), agent.name());
        }
    }

    println!("\nSiren blasts: {}", siren.lock().map(|s| s.blasts).unwrap_or(0));
    println!("\n=== Example Complete ===");
}
