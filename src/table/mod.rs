//! The all-pairs result table.
//!
//! The table holds one shortest path for every ordered pair of states. It is
//! filled once, start states in the outer loop and end states in the inner
//! loop, both in declaration order; that order is also the order every
//! iterator and emitter walks it in.

pub mod error;
pub mod validate;

pub use error::{TableError, TableViolation};
pub use validate::validate;

use crate::core::{Path, TapState, TransitionTable};
use crate::search::PathFinder;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use tracing::debug;

/// Upper bound on the length of any table entry, in clocks.
pub const MAX_PATH_LEN: usize = 15;

/// Number of cells in a complete table.
pub const TABLE_SIZE: usize = TapState::COUNT * TapState::COUNT;

/// Nested start -> end -> path view of a table, ordered by declaration order.
pub type NestedTable = BTreeMap<TapState, BTreeMap<TapState, Path>>;

/// Shortest path for every ordered pair of states.
///
/// # Example
///
/// ```rust
/// use tapwalk::{ResultTable, TapState};
///
/// let table = ResultTable::build().unwrap();
///
/// assert_eq!(table.get(TapState::UpdateIR, TapState::UpdateDR).to_string(), "1011");
/// assert!(table.get(TapState::ShiftDR, TapState::ShiftDR).is_empty());
/// assert_eq!(table.diameter(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    paths: Vec<Path>,
}

impl ResultTable {
    /// Build the table for the standard controller.
    pub fn build() -> Result<Self, TableError> {
        Self::build_from(&TransitionTable::STANDARD)
    }

    /// Build the table for `graph`.
    ///
    /// Fails on the first pair whose search fails; no partial table is ever
    /// returned.
    pub fn build_from(graph: &TransitionTable) -> Result<Self, TableError> {
        let finder = PathFinder::new(graph);
        let mut paths = Vec::with_capacity(TABLE_SIZE);

        for &start in TapState::ALL {
            for &end in TapState::ALL {
                paths.push(finder.shortest_path(start, end)?);
            }
            debug!(%start, "table row complete");
        }

        Ok(Self { paths })
    }

    /// Wrap cells that are already in enumeration order.
    pub(crate) fn from_cells(paths: Vec<Path>) -> Self {
        debug_assert_eq!(paths.len(), TABLE_SIZE);
        Self { paths }
    }

    /// Rebuild a table from its nested view, rejecting any missing pair.
    /// Extra keys cannot occur: both levels are keyed by [`TapState`].
    pub fn from_nested(mut nested: NestedTable) -> Result<Self, TableError> {
        let mut paths = Vec::with_capacity(TABLE_SIZE);
        let mut missing = Vec::new();

        for &start in TapState::ALL {
            let mut row = nested.remove(&start).unwrap_or_default();
            for &end in TapState::ALL {
                match row.remove(&end) {
                    Some(path) => paths.push(path),
                    None => missing.push(TableViolation::MissingEntry { start, end }),
                }
            }
        }

        if missing.is_empty() {
            Ok(Self { paths })
        } else {
            Err(TableError::Invalid(missing))
        }
    }

    /// Nested start -> end -> path view of the table.
    pub fn to_nested(&self) -> NestedTable {
        let mut nested = NestedTable::new();
        for (start, end, path) in self.iter() {
            nested.entry(start).or_default().insert(end, path.clone());
        }
        nested
    }

    /// Shortest path from `start` to `end`.
    pub fn get(&self, start: TapState, end: TapState) -> &Path {
        &self.paths[start.index() * TapState::COUNT + end.index()]
    }

    /// Every cell in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (TapState, TapState, &Path)> + '_ {
        TapState::ALL
            .iter()
            .flat_map(|&start| TapState::ALL.iter().map(move |&end| (start, end)))
            .zip(self.paths.iter())
            .map(|((start, end), path)| (start, end, path))
    }

    /// Number of cells, always [`TABLE_SIZE`].
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the table has no cells. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Length of the longest entry.
    pub fn diameter(&self) -> usize {
        self.paths.iter().map(|path| path.len()).max().unwrap_or(0)
    }

    /// TMS sequence that drives the controller from `start` through every
    /// state of `via` in order, each leg taking its shortest path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tapwalk::{ResultTable, TapState};
    ///
    /// let table = ResultTable::build().unwrap();
    /// let route = table.route(
    ///     TapState::RunTestIdle,
    ///     &[TapState::ShiftIR, TapState::RunTestIdle],
    /// );
    /// assert_eq!(route.to_string(), "1100110");
    /// ```
    pub fn route(&self, start: TapState, via: &[TapState]) -> Path {
        let mut route = Path::empty();
        let mut current = start;
        for &next in via {
            route.extend_from(self.get(current, next));
            current = next;
        }
        route
    }

    /// Check every cell against `graph`, collecting all violations.
    pub fn verify(&self, graph: &TransitionTable) -> Result<(), TableError> {
        match validate(self, graph) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(TableError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
