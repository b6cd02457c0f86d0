//! Breadth-first search for the shortest TMS path between two states.
//!
//! States are explored in the order they are first reached. Each dequeued
//! state is expanded TMS=0 first, then TMS=1, and the search stops the moment
//! a successor equals the target. Because breadth-first search visits states
//! in non-decreasing distance order, that first hit is a shortest path, and
//! the fixed expansion order makes the choice among equally short paths
//! deterministic.

mod error;

pub use error::SearchError;

use crate::core::{Path, TapState, TransitionTable};
use std::collections::VecDeque;
use tracing::trace;

/// Shortest TMS path from `start` to `end` on the standard controller.
///
/// # Example
///
/// ```rust
/// use tapwalk::{shortest_path, TapState};
///
/// let path = shortest_path(TapState::TestLogicReset, TapState::RunTestIdle).unwrap();
/// assert_eq!(path.signals(), &[false]);
///
/// let path = shortest_path(TapState::PauseIR, TapState::PauseIR).unwrap();
/// assert!(path.is_empty());
/// ```
pub fn shortest_path(start: TapState, end: TapState) -> Result<Path, SearchError> {
    PathFinder::new(&TransitionTable::STANDARD).shortest_path(start, end)
}

/// Shortest-path search over a borrowed [`TransitionTable`].
///
/// Every call owns its own queue and visited set, so one finder can answer
/// any number of independent queries.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'a> {
    graph: &'a TransitionTable,
}

impl<'a> PathFinder<'a> {
    /// Create a finder over `graph`.
    pub fn new(graph: &'a TransitionTable) -> Self {
        Self { graph }
    }

    /// Shortest TMS path from `start` to `end`.
    ///
    /// Returns the empty path when `start == end` without searching; the
    /// self-loops of the stable states would otherwise produce a one-clock
    /// path back to the start.
    pub fn shortest_path(&self, start: TapState, end: TapState) -> Result<Path, SearchError> {
        if start == end {
            return Ok(Path::empty());
        }

        let mut seen = [false; TapState::COUNT];
        seen[start.index()] = true;

        let mut queue = VecDeque::from([(start, Path::empty())]);
        while let Some((state, path)) = queue.pop_front() {
            trace!(%state, depth = path.len(), "expanding");

            for (tms, next) in self.graph.edges(state) {
                if next == end {
                    return Ok(path.with_signal(tms));
                }
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back((next, path.with_signal(tms)));
                }
            }
        }

        Err(SearchError::Unreachable { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TapState::*;

    fn bits(path: &Path) -> Vec<u8> {
        path.iter().map(|&tms| u8::from(tms)).collect()
    }

    #[test]
    fn self_pairs_are_empty() {
        for &state in TapState::ALL {
            assert!(shortest_path(state, state).unwrap().is_empty(), "{state}");
        }
    }

    #[test]
    fn known_shortest_paths() {
        let cases: [(TapState, TapState, &[u8]); 9] = [
            (TestLogicReset, RunTestIdle, &[0]),
            (RunTestIdle, SelectDR, &[1]),
            (SelectDR, SelectIR, &[1]),
            (ShiftDR, ShiftIR, &[1, 1, 1, 1, 0, 0]),
            (UpdateIR, UpdateDR, &[1, 0, 1, 1]),
            (RunTestIdle, TestLogicReset, &[1, 1, 1]),
            (PauseIR, TestLogicReset, &[1, 1, 1, 1, 1]),
            (Exit2IR, PauseIR, &[0, 1, 0]),
            (CaptureDR, Exit2IR, &[1, 1, 1, 1, 0, 1, 0, 1]),
        ];

        for (start, end, expected) in cases {
            let path = shortest_path(start, end).unwrap();
            assert_eq!(bits(&path), expected, "{start} -> {end}");
        }
    }

    #[test]
    fn no_shorter_sequence_exists() {
        let graph = TransitionTable::STANDARD;
        for &start in TapState::ALL {
            for &end in TapState::ALL {
                let len = shortest_path(start, end).unwrap().len();
                for shorter in 0..len {
                    for word in 0..(1u32 << shorter) {
                        let signals: Vec<bool> =
                            (0..shorter).map(|i| (word >> i) & 1 == 1).collect();
                        assert_ne!(
                            graph.replay(start, &signals),
                            end,
                            "{start} -> {end} in {shorter} clocks"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        for &start in TapState::ALL {
            for &end in TapState::ALL {
                assert_eq!(
                    shortest_path(start, end).unwrap(),
                    shortest_path(start, end).unwrap()
                );
            }
        }
    }

    #[test]
    fn paths_replay_to_their_target() {
        let graph = TransitionTable::STANDARD;
        let finder = PathFinder::new(&graph);
        for &start in TapState::ALL {
            for &end in TapState::ALL {
                let path = finder.shortest_path(start, end).unwrap();
                assert_eq!(graph.replay(start, &path), end, "{start} -> {end}");
            }
        }
    }

    #[test]
    fn unreachable_target_is_an_error() {
        // Every state falls into TestLogicReset, which never leaves.
        let graph = TransitionTable::from_rows([[TestLogicReset; 2]; TapState::COUNT]);
        let finder = PathFinder::new(&graph);

        assert_eq!(
            finder.shortest_path(ShiftDR, TestLogicReset).unwrap().signals(),
            &[false]
        );
        assert_eq!(
            finder.shortest_path(ShiftDR, ShiftIR),
            Err(SearchError::Unreachable {
                start: ShiftDR,
                end: ShiftIR,
            })
        );
    }
}
