//! Adjacency of the TAP controller.

use super::state::TapState;
use std::collections::VecDeque;

/// Total successor function over [`TapState`].
///
/// Stored as one `[on_tms_0, on_tms_1]` row per state, indexed by
/// [`TapState::index`], so a lookup is a pair of array accesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    rows: [[TapState; 2]; TapState::COUNT],
}

impl TransitionTable {
    /// The controller topology fixed by IEEE 1149.1.
    pub const STANDARD: TransitionTable = {
        use TapState::*;
        TransitionTable {
            rows: [
                //                TMS = 0         TMS = 1
                /* TestLogicReset */ [RunTestIdle, TestLogicReset],
                /* RunTestIdle    */ [RunTestIdle, SelectDR],
                /* SelectDR       */ [CaptureDR, SelectIR],
                /* CaptureDR      */ [ShiftDR, Exit1DR],
                /* ShiftDR        */ [ShiftDR, Exit1DR],
                /* Exit1DR        */ [PauseDR, UpdateDR],
                /* PauseDR        */ [PauseDR, Exit2DR],
                /* Exit2DR        */ [ShiftDR, UpdateDR],
                /* UpdateDR       */ [RunTestIdle, SelectDR],
                /* SelectIR       */ [CaptureIR, TestLogicReset],
                /* CaptureIR      */ [ShiftIR, Exit1IR],
                /* ShiftIR        */ [ShiftIR, Exit1IR],
                /* Exit1IR        */ [PauseIR, UpdateIR],
                /* PauseIR        */ [PauseIR, Exit2IR],
                /* Exit2IR        */ [ShiftIR, UpdateIR],
                /* UpdateIR       */ [RunTestIdle, SelectDR],
            ],
        }
    };

    /// Build a table from explicit rows. Only used to exercise the search
    /// against graphs that break the standard topology.
    #[cfg(test)]
    pub(crate) const fn from_rows(rows: [[TapState; 2]; TapState::COUNT]) -> Self {
        Self { rows }
    }

    /// State reached from `state` after clocking `tms`.
    pub const fn successor(&self, state: TapState, tms: bool) -> TapState {
        self.rows[state.index()][tms as usize]
    }

    /// Both outgoing edges of `state`, TMS=0 first.
    pub fn edges(&self, state: TapState) -> [(bool, TapState); 2] {
        let [on_low, on_high] = self.rows[state.index()];
        [(false, on_low), (true, on_high)]
    }

    /// State reached by clocking every signal of `signals` in order,
    /// starting from `start`.
    pub fn replay(&self, start: TapState, signals: &[bool]) -> TapState {
        signals
            .iter()
            .fold(start, |state, &tms| self.successor(state, tms))
    }

    /// Number of clocks needed to reach each state from `start`, indexed by
    /// [`TapState::index`]. `None` marks a state that cannot be reached.
    ///
    /// This is a plain breadth-first distance count that never records
    /// paths; it serves as the reference the path finder is checked against.
    pub fn distances_from(&self, start: TapState) -> [Option<usize>; TapState::COUNT] {
        let mut distances = [None; TapState::COUNT];
        distances[start.index()] = Some(0);

        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((state, distance)) = queue.pop_front() {
            for (_, next) in self.edges(state) {
                if distances[next.index()].is_none() {
                    distances[next.index()] = Some(distance + 1);
                    queue.push_back((next, distance + 1));
                }
            }
        }

        distances
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// State reached from `state` after clocking `signal` on the standard
/// controller.
pub fn successors(state: TapState, signal: bool) -> TapState {
    TransitionTable::STANDARD.successor(state, signal)
}
