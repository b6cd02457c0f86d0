//! Result table errors.

use crate::core::TapState;
use crate::search::SearchError;
use thiserror::Error;

/// A single broken cell of a result table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("{start} -> {end}: path ends in {reached}")]
    WrongEnd {
        start: TapState,
        end: TapState,
        reached: TapState,
    },

    #[error("{start} -> {end}: path has {len} clocks, bound is {max}")]
    TooLong {
        start: TapState,
        end: TapState,
        len: usize,
        max: usize,
    },

    #[error("{start} -> {end}: path has {len} clocks, shortest is {shortest}")]
    NotMinimal {
        start: TapState,
        end: TapState,
        len: usize,
        shortest: usize,
    },

    #[error("{state} -> {state}: self path has {len} clocks, expected none")]
    NonEmptySelfPath { state: TapState, len: usize },

    #[error("{start} -> {end}: no path exists in the transition graph")]
    Unreachable { start: TapState, end: TapState },

    #[error("{start} -> {end}: entry missing")]
    MissingEntry { start: TapState, end: TapState },
}

/// Errors that abort building or loading a result table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A pair could not be searched
    #[error("Table generation failed: {0}")]
    Search(#[from] SearchError),

    /// The table broke one or more cell invariants
    #[error("Table failed validation with {} violation(s), first: {}", .0.len(), first_violation(.0))]
    Invalid(Vec<TableViolation>),
}

fn first_violation(violations: &[TableViolation]) -> String {
    violations
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}
