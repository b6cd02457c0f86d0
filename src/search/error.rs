//! Path search errors.

use crate::core::TapState;
use thiserror::Error;

/// Errors that can occur while searching for a path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The search exhausted every reachable state without meeting `end`.
    /// The standard graph is strongly connected, so this means the graph
    /// itself is broken.
    #[error("No path from {start} to {end}: the transition graph is not strongly connected")]
    Unreachable { start: TapState, end: TapState },
}
