//! The sequence of states visited while replaying a TMS path.
//!
//! A walk is an immutable record: `record` returns a new walk with one more
//! step and leaves the original alone.

use super::graph::TransitionTable;
use super::path::Path;
use super::state::TapState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One clock edge: the state before, the TMS value and the state after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// State before the clock edge
    pub from: TapState,
    /// TMS value sampled on the edge
    pub tms: bool,
    /// State after the clock edge
    pub to: TapState,
}

/// Ordered record of the steps taken from a start state.
///
/// # Example
///
/// ```rust
/// use tapwalk::{TapState, TransitionTable, Walk};
///
/// let walk = Walk::replay(
///     &TransitionTable::STANDARD,
///     TapState::RunTestIdle,
///     &[true, false, false],
/// );
///
/// assert_eq!(walk.end(), TapState::ShiftDR);
/// assert_eq!(
///     walk.get_path(),
///     vec![
///         TapState::RunTestIdle,
///         TapState::SelectDR,
///         TapState::CaptureDR,
///         TapState::ShiftDR,
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    start: TapState,
    steps: Vec<Step>,
}

impl Walk {
    /// Create a walk that has not left `start` yet.
    pub fn new(start: TapState) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Replay `signals` from `start` through `graph`.
    pub fn replay(graph: &TransitionTable, start: TapState, signals: &[bool]) -> Self {
        signals.iter().fold(Self::new(start), |walk, &tms| {
            let from = walk.end();
            walk.record(Step {
                from,
                tms,
                to: graph.successor(from, tms),
            })
        })
    }

    /// Record a step, returning a new walk.
    pub fn record(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            start: self.start,
            steps,
        }
    }

    /// The state the walk started in.
    pub fn start(&self) -> TapState {
        self.start
    }

    /// The state the walk ends in.
    pub fn end(&self) -> TapState {
        self.steps.last().map_or(self.start, |step| step.to)
    }

    /// States traversed: the start state, then the target of every step.
    pub fn get_path(&self) -> Vec<TapState> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|step| step.to))
            .collect()
    }

    /// The TMS values that produced this walk.
    pub fn signals(&self) -> Path {
        self.steps.iter().map(|step| step.tms).collect()
    }

    /// All recorded steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for step in &self.steps {
            write!(f, " -{}-> {}", u8::from(step.tms), step.to)?;
        }
        Ok(())
    }
}
