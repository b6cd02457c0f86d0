//! Property-based tests for the TAP model and its path table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and TMS sequences.

use proptest::prelude::*;
use tapwalk::table::MAX_PATH_LEN;
use tapwalk::{
    shortest_path, successors, ResultTable, TableArtifact, TapState, TransitionTable, Walk,
    RESET_SEQUENCE,
};

prop_compose! {
    fn arbitrary_state()(index in 0..TapState::COUNT) -> TapState {
        TapState::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_signals(max_len: usize)
        (signals in prop::collection::vec(any::<bool>(), 0..max_len)) -> Vec<bool> {
        signals
    }
}

fn replay(start: TapState, signals: &[bool]) -> TapState {
    signals
        .iter()
        .fold(start, |state, &tms| successors(state, tms))
}

proptest! {
    #[test]
    fn self_path_is_empty(state in arbitrary_state()) {
        prop_assert!(shortest_path(state, state).unwrap().is_empty());
    }

    #[test]
    fn path_replays_to_end(start in arbitrary_state(), end in arbitrary_state()) {
        let path = shortest_path(start, end).unwrap();
        prop_assert!(path.len() <= MAX_PATH_LEN);
        prop_assert_eq!(replay(start, &path), end);
    }

    #[test]
    fn path_length_is_bfs_distance(start in arbitrary_state(), end in arbitrary_state()) {
        let path = shortest_path(start, end).unwrap();
        let distances = TransitionTable::STANDARD.distances_from(start);
        prop_assert_eq!(Some(path.len()), distances[end.index()]);
    }

    #[test]
    fn no_sequence_beats_the_table(start in arbitrary_state(), signals in arbitrary_signals(24)) {
        // Whatever state a random sequence reaches, the table gets there in
        // at most as many clocks.
        let end = replay(start, &signals);
        let path = shortest_path(start, end).unwrap();
        prop_assert!(path.len() <= signals.len());
    }

    #[test]
    fn search_is_deterministic(start in arbitrary_state(), end in arbitrary_state()) {
        let first = shortest_path(start, end).unwrap();
        let second = shortest_path(start, end).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn transition_matches_successors(state in arbitrary_state(), tms in any::<bool>()) {
        prop_assert_eq!(state.transition(tms), successors(state, tms));
    }

    #[test]
    fn reset_sequence_always_resets(start in arbitrary_state(), signals in arbitrary_signals(16)) {
        let anywhere = replay(start, &signals);
        prop_assert_eq!(replay(anywhere, &RESET_SEQUENCE), TapState::TestLogicReset);
    }

    #[test]
    fn walk_agrees_with_replay(start in arbitrary_state(), signals in arbitrary_signals(16)) {
        let walk = Walk::replay(&TransitionTable::STANDARD, start, &signals);
        prop_assert_eq!(walk.end(), replay(start, &signals));
        prop_assert_eq!(walk.get_path().len(), signals.len() + 1);
        prop_assert_eq!(walk.signals().into_inner(), signals);
    }

    #[test]
    fn route_visits_every_waypoint(
        start in arbitrary_state(),
        via in prop::collection::vec(arbitrary_state(), 0..6)
    ) {
        let table = ResultTable::build().unwrap();
        let route = table.route(start, &via);

        let mut offset = 0;
        let mut current = start;
        for &waypoint in &via {
            let leg = table.get(current, waypoint);
            prop_assert_eq!(&route[offset..offset + leg.len()], leg.signals());
            prop_assert_eq!(replay(current, leg), waypoint);
            offset += leg.len();
            current = waypoint;
        }
        prop_assert_eq!(offset, route.len());
        prop_assert_eq!(replay(start, &route), via.last().copied().unwrap_or(start));
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TapState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn state_name_parses_back(state in arbitrary_state()) {
        prop_assert_eq!(state.name().parse::<TapState>().unwrap(), state);
        prop_assert_eq!(state.name().to_lowercase().parse::<TapState>().unwrap(), state);
    }
}

#[test]
fn artifact_roundtrip_preserves_table() {
    let table = ResultTable::build().unwrap();
    let json = TableArtifact::new(&table).to_json().unwrap();
    let restored = TableArtifact::from_json(&json).unwrap().into_table().unwrap();
    assert_eq!(restored, table);
}
