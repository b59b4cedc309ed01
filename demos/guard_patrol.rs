//! Guard Patrol State Machine
//!
//! This example drives a guard through patrol, investigation and rest using
//! symbol-backed conditions and actions.
//!
//! Key concepts:
//! - Wiring states and transitions by name with the builder
//! - Symbol actions writing the machine's table
//! - Symbol conditions guarding transitions
//! - First-match-wins evaluation order
//!
//! Run with: cargo run --example guard_patrol

use reflex::builder::{symbol_transition, FsmBuilder};
use reflex::{symbols, Action, Fsm, State};

fn state_name(fsm: &Fsm) -> &str {
    fsm.current().map(State::name).unwrap_or("<none>")
}

fn main() {
    println!("=== Guard Patrol State Machine ===\n");

    let mut fsm = FsmBuilder::new()
        .state(
            State::new("Patrol")
                .on_enter(Action::function(|| println!("  [enter] starting patrol route")))
                .on_exit(Action::function(|| println!("  [exit]  leaving patrol route"))),
        )
        .state(
            State::new("Investigate")
                .on_enter(Action::symbol("noise", false))
                .on_enter(Action::function(|| println!("  [enter] checking the noise"))),
        )
        .state(
            State::new("Rest")
                .on_enter(Action::symbol("tired", false))
                .on_enter(Action::function(|| println!("  [enter] taking a break"))),
        )
        .start("Patrol")
        .symbols(symbols! { "noise" => false, "tired" => false })
        // Noise outranks fatigue: it is declared first.
        .transition(symbol_transition("Patrol", "Investigate", "noise", true))
        .transition(symbol_transition("Patrol", "Rest", "tired", true))
        .transition(symbol_transition("Investigate", "Patrol", "noise", false))
        .transition(symbol_transition("Rest", "Patrol", "tired", false))
        .build()
        .unwrap();

    fsm.reset();
    println!("Initial state: {}\n", state_name(&fsm));

    let script: [(&str, &str, bool); 4] = [
        ("quiet tick", "noise", false),
        ("a noise and fatigue at once", "noise", true),
        ("guard is tired", "tired", true),
        ("nothing new", "noise", false),
    ];

    for (tick, (label, symbol, value)) in script.iter().enumerate() {
        println!("Tick {tick}: {label}");
        let table = fsm.symbol_table_mut().unwrap();
        table.set_symbol(symbol, *value);
        if tick == 1 {
            table.set_symbol("tired", true);
        }
        match fsm.update() {
            Some(transition) => println!("  fired {transition}, now {}", state_name(&fsm)),
            None => println!("  no transition, still {}", state_name(&fsm)),
        }
        println!();
    }

    println!("Path taken: {:?}", fsm.history().path());
    println!("\n=== Example Complete ===");
}
