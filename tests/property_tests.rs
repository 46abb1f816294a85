//! Property-based tests for the engine.
//!
//! These tests use proptest to generate random machines and input sequences
//! and check the engine against a plain map model.

use fsmkit::core::{CompactSet, TransitionTable};
use fsmkit::engine::{Engine, EngineConfig};
use fsmkit::{InputAlphabet, StateRegistry};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

const STATES: u32 = 6;
const INPUTS: u32 = 4;

prop_compose! {
    fn arbitrary_rules()(
        rules in prop::collection::vec((0..STATES, 0..INPUTS, 0..STATES), 0..24)
    ) -> Vec<(u32, u32, u32)> {
        rules
    }
}

fn build(rules: &[(u32, u32, u32)]) -> (Engine<u32, u32, ()>, HashMap<(u32, u32), u32>) {
    let states = StateRegistry::<u32>::try_from_iter(0..STATES).unwrap();
    let inputs = InputAlphabet::<u32>::try_from_iter(0..INPUTS).unwrap();
    let mut engine = Engine::with_config(states, inputs, EngineConfig::with_history(1024)).unwrap();
    let mut model = HashMap::new();

    for &(source, input, target) in rules {
        let accepted = engine.add_rule(source, input, target, None).is_ok();
        let fresh = !model.contains_key(&(source, input));
        assert_eq!(accepted, fresh);
        model.entry((source, input)).or_insert(target);
    }
    (engine, model)
}

proptest! {
    #[test]
    fn compact_set_matches_btree_set(values in prop::collection::vec(0usize..300, 0..64)) {
        let mut set = CompactSet::new();
        let mut model = BTreeSet::new();
        for v in &values {
            set.add(*v).unwrap();
            model.insert(*v);
        }

        prop_assert_eq!(set.count(), model.len());
        prop_assert_eq!(set.len(), model.iter().next_back().map_or(0, |max| max + 1));
        for i in 0..300 {
            prop_assert_eq!(set.contains(i), model.contains(&i));
        }
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn table_keeps_first_rule_per_pair(rules in arbitrary_rules()) {
        let mut table = TransitionTable::new();
        let mut model: HashMap<(u32, u32), u32> = HashMap::new();

        for (source, input, target) in rules {
            let result = table.add_rule(source, input, target);
            prop_assert_eq!(result.is_ok(), !model.contains_key(&(source, input)));
            model.entry((source, input)).or_insert(target);
        }

        prop_assert_eq!(table.len(), model.len());
        for ((source, input), target) in &model {
            prop_assert_eq!(table.lookup(source, input), Ok(*target));
        }
    }

    #[test]
    fn can_agrees_with_rules_and_never_mutates(
        rules in arbitrary_rules(),
        start in 0..STATES,
    ) {
        let (engine, model) = build(&rules);
        engine.set_state(start).unwrap();

        for input in 0..INPUTS {
            prop_assert_eq!(engine.can(input), model.contains_key(&(start, input)));
            prop_assert_eq!(engine.state(), start);
        }
        prop_assert!(!engine.can(INPUTS + 1));
        prop_assert!(engine.history().is_empty());
    }

    #[test]
    fn process_tracks_model(
        rules in arbitrary_rules(),
        inputs in prop::collection::vec(0..INPUTS + 2, 0..40),
    ) {
        let (engine, model) = build(&rules);
        let mut current = 0u32;
        let mut committed = 0usize;

        for input in inputs {
            let result = engine.process(input);
            match model.get(&(current, input)) {
                Some(&target) if input < INPUTS => {
                    prop_assert!(result.is_ok());
                    current = target;
                    committed += 1;
                }
                _ => {
                    let err = result.unwrap_err();
                    prop_assert!(err.is_no_transition() || input >= INPUTS);
                    prop_assert!(!err.is_committed());
                }
            }
            prop_assert_eq!(engine.state(), current);
        }

        prop_assert_eq!(engine.history().len(), committed);
    }

    #[test]
    fn reset_always_returns_to_initial(
        rules in arbitrary_rules(),
        inputs in prop::collection::vec(0..INPUTS, 0..20),
    ) {
        let (engine, _) = build(&rules);
        for input in inputs {
            let _ = engine.process(input);
        }

        engine.reset();
        prop_assert_eq!(engine.state(), engine.initial_state());
        prop_assert_eq!(engine.state(), 0);
    }
}
