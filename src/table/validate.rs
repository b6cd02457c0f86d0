//! Cell invariants of a result table, checked with `Validation` so that a
//! broken table reports every bad cell instead of the first one.

use crate::core::{TapState, TransitionTable, Walk};
use crate::table::error::TableViolation;
use crate::table::{ResultTable, MAX_PATH_LEN};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking one cell or a whole table.
pub type CellValidation = Validation<(), NonEmptyVec<TableViolation>>;

/// Check every cell of `table` against `graph`.
///
/// A cell passes when its path is empty for a self pair, replays to the
/// end state, fits within [`MAX_PATH_LEN`] and is exactly as long as the
/// breadth-first distance between the two states.
pub fn validate(table: &ResultTable, graph: &TransitionTable) -> CellValidation {
    let mut checks: Vec<CellValidation> = Vec::with_capacity(table.len());

    for &start in TapState::ALL {
        let distances = graph.distances_from(start);
        for &end in TapState::ALL {
            checks.push(check_cell(
                graph,
                start,
                end,
                table.get(start, end).signals(),
                distances[end.index()],
            ));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_cell(
    graph: &TransitionTable,
    start: TapState,
    end: TapState,
    signals: &[bool],
    shortest: Option<usize>,
) -> CellValidation {
    let len = signals.len();
    let mut checks: Vec<CellValidation> = Vec::new();

    if start == end && len != 0 {
        checks.push(Validation::fail(TableViolation::NonEmptySelfPath {
            state: start,
            len,
        }));
    }

    let reached = Walk::replay(graph, start, signals).end();
    if reached != end {
        checks.push(Validation::fail(TableViolation::WrongEnd {
            start,
            end,
            reached,
        }));
    }

    if len > MAX_PATH_LEN {
        checks.push(Validation::fail(TableViolation::TooLong {
            start,
            end,
            len,
            max: MAX_PATH_LEN,
        }));
    }

    match shortest {
        Some(shortest) if shortest != len => {
            checks.push(Validation::fail(TableViolation::NotMinimal {
                start,
                end,
                len,
                shortest,
            }));
        }
        Some(_) => {}
        None => checks.push(Validation::fail(TableViolation::Unreachable { start, end })),
    }

    Validation::all_vec(checks).map(|_| ())
}
