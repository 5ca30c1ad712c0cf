//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to drive machines through random sequences of
//! triggers, jumps, undos and redos and check the history invariants.

use proptest::prelude::*;
use retrace::{machine_config, MachineConfig, MachineError, StateMachine};

const STATES: [&str; 4] = ["idle", "running", "paused", "done"];
const EVENTS: [&str; 5] = ["start", "pause", "resume", "stop", "finish"];

fn player() -> MachineConfig {
    machine_config! {
        initial: "idle",
        states: {
            "idle" => { "start" => "running" },
            "running" => { "pause" => "paused", "stop" => "idle", "finish" => "done" },
            "paused" => { "resume" => "running", "stop" => "idle" },
            "done" => {},
        }
    }
}

#[derive(Clone, Debug)]
enum Step {
    Trigger(&'static str),
    Change(&'static str),
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arbitrary_event().prop_map(Step::Trigger),
        1 => arbitrary_state().prop_map(Step::Change),
    ]
}

/// Apply steps, returning the state after every successful one, starting
/// with the initial state.
fn run(machine: &mut StateMachine, steps: &[Step]) -> Vec<String> {
    let mut visited = vec![machine.state().to_string()];
    for step in steps {
        let applied = match step {
            Step::Trigger(event) => machine.trigger(event),
            Step::Change(state) => machine.change_state(state),
        };
        if applied.is_ok() {
            visited.push(machine.state().to_string());
        }
    }
    visited
}

proptest! {
    #[test]
    fn top_of_past_tracks_current_state(steps in prop::collection::vec(arbitrary_step(), 0..20)) {
        let mut machine = StateMachine::new(player());
        let visited = run(&mut machine, &steps);

        prop_assert_eq!(machine.history().past(), visited.as_slice());
        prop_assert_eq!(machine.history().past().last().map(String::as_str), Some(machine.state()));
    }

    #[test]
    fn failed_trigger_changes_nothing(
        steps in prop::collection::vec(arbitrary_step(), 0..10),
        event in arbitrary_event(),
    ) {
        let mut machine = StateMachine::new(player());
        run(&mut machine, &steps);
        let before = machine.state().to_string();
        let history = machine.history().clone();

        match machine.trigger(event) {
            Ok(()) => prop_assert!(machine.history().past().len() == history.past().len() + 1),
            Err(err) => {
                prop_assert!(matches!(err, MachineError::InvalidEvent { .. }), "unexpected error: {}", err);
                prop_assert_eq!(machine.state(), before.as_str());
                prop_assert_eq!(machine.history(), &history);
            }
        }
    }

    #[test]
    fn undo_k_then_redo_k_round_trips(
        steps in prop::collection::vec(arbitrary_step(), 1..20),
        depth in 0usize..20,
    ) {
        let mut machine = StateMachine::new(player());
        let visited = run(&mut machine, &steps);
        let k = depth.min(visited.len() - 1);

        for i in 1..=k {
            prop_assert!(machine.undo());
            prop_assert_eq!(machine.state(), visited[visited.len() - 1 - i].as_str());
        }
        if k == visited.len() - 1 {
            prop_assert!(!machine.undo());
        }

        for _ in 0..k {
            prop_assert!(machine.redo());
        }
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.state(), visited[visited.len() - 1].as_str());
        prop_assert_eq!(machine.history().past(), visited.as_slice());
    }

    #[test]
    fn fresh_change_after_undo_discards_redo(
        steps in prop::collection::vec(arbitrary_step(), 1..15),
        target in arbitrary_state(),
    ) {
        let mut machine = StateMachine::new(player());
        run(&mut machine, &steps);
        prop_assume!(machine.undo());

        machine.change_state(target).unwrap();

        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.state(), target);
    }

    #[test]
    fn reset_empties_history(steps in prop::collection::vec(arbitrary_step(), 0..15)) {
        let mut machine = StateMachine::new(player());
        run(&mut machine, &steps);
        machine.undo();

        machine.reset();

        prop_assert_eq!(machine.state(), "idle");
        prop_assert!(machine.history().past().is_empty());
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn states_for_event_is_exact_subset(event in "[a-z]{0,8}") {
        let config = player();
        let machine = StateMachine::new(config.clone());

        let expected: Vec<&str> = if event.is_empty() {
            config.states.names().collect()
        } else {
            config
                .states
                .iter()
                .filter(|(_, def)| def.destination(&event).is_some())
                .map(|(name, _)| name)
                .collect()
        };

        prop_assert_eq!(machine.states(Some(event.as_str())), expected);
    }
}

#[test]
fn states_without_event_lists_every_declared_state() {
    let machine = StateMachine::new(player());

    assert_eq!(machine.states(None), STATES.to_vec());
    assert_eq!(machine.states(Some("stop")), vec!["running", "paused"]);
    assert!(machine.states(Some("rewind")).is_empty());
}
