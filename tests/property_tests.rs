//! Property-based tests for the evaluation protocol and symbol table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines.

use reflex::{Condition, Fsm, MachineConfig, State, StateId, SymbolTable, Transition};
use proptest::prelude::*;
use std::collections::HashMap;

/// One source state with a transition per guard list, each to its own target.
fn fan_out(guards: &[Vec<bool>]) -> (Fsm, StateId, Vec<StateId>) {
    let mut fsm = Fsm::new();
    let source = fsm.add_state(State::new("Source"));
    let mut targets = Vec::new();
    for (i, conditions) in guards.iter().enumerate() {
        let target = fsm.add_state(State::new(format!("Target{i}")));
        let mut transition = Transition::new(source, target);
        for &result in conditions {
            transition = transition.when(Condition::function(move || result));
        }
        fsm.add_transition(transition);
        targets.push(target);
    }
    (fsm, source, targets)
}

prop_compose! {
    fn arbitrary_guards()(
        guards in prop::collection::vec(prop::collection::vec(any::<bool>(), 0..4), 0..6)
    ) -> Vec<Vec<bool>> {
        guards
    }
}

proptest! {
    #[test]
    fn first_satisfied_transition_fires(guards in arbitrary_guards()) {
        let (mut fsm, source, targets) = fan_out(&guards);
        fsm.set_current_state(source);

        let expected = guards
            .iter()
            .position(|conditions| conditions.iter().any(|&c| c));

        let fired = fsm.update();

        prop_assert_eq!(fired.map(|t| t.index()), expected);
        match expected {
            Some(index) => prop_assert_eq!(fsm.current_state(), Some(targets[index])),
            None => prop_assert_eq!(fsm.current_state(), Some(source)),
        }
    }

    #[test]
    fn conditions_combine_with_or(conditions in prop::collection::vec(any::<bool>(), 0..8)) {
        let (mut fsm, source, targets) = fan_out(std::slice::from_ref(&conditions));
        fsm.set_current_state(source);

        fsm.update();

        let fired = fsm.current_state() == Some(targets[0]);
        prop_assert_eq!(fired, conditions.iter().any(|&c| c));
    }

    #[test]
    fn unstarted_machine_never_fires(guards in arbitrary_guards()) {
        let (mut fsm, _, _) = fan_out(&guards);

        prop_assert!(fsm.update().is_none());
        prop_assert!(fsm.current_state().is_none());
    }

    #[test]
    fn symbol_table_keeps_last_write(
        writes in prop::collection::vec((0..5usize, any::<bool>()), 0..40)
    ) {
        let mut table = SymbolTable::new();
        let mut model = HashMap::new();

        for (key, value) in &writes {
            let name = format!("s{key}");
            table.set_symbol(&name, *value);
            model.insert(name, *value);
        }

        prop_assert_eq!(table.len(), model.len());
        for key in 0..5usize {
            let name = format!("s{key}");
            prop_assert_eq!(table.get_symbol(&name), model.get(&name).copied().unwrap_or(false));
        }
    }

    #[test]
    fn symbol_condition_matches_table(value in any::<bool>(), expected in any::<bool>()) {
        let mut table = SymbolTable::new();
        table.set_symbol("flag", value);

        let condition = Condition::symbol("flag", expected);

        prop_assert_eq!(condition.check(Some(&table)), value == expected);
        prop_assert!(!condition.check(None));
    }

    #[test]
    fn history_respects_limit(limit in 0..6usize, changes in 0..20usize) {
        let config = MachineConfig {
            history_limit: Some(limit),
            ..MachineConfig::default()
        };
        let mut fsm = Fsm::with_config(config);
        let state = fsm.add_state(State::new("Loop"));

        for _ in 0..changes {
            fsm.set_current_state(state);
        }

        prop_assert_eq!(fsm.history().len(), changes.min(limit));
    }

    #[test]
    fn update_is_deterministic(guards in arbitrary_guards()) {
        let (mut first, source_a, _) = fan_out(&guards);
        let (mut second, source_b, _) = fan_out(&guards);
        first.set_current_state(source_a);
        second.set_current_state(source_b);

        prop_assert_eq!(first.update(), second.update());
        prop_assert_eq!(
            first.current_state().map(StateId::index),
            second.current_state().map(StateId::index)
        );
    }
}
