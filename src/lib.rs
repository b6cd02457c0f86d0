//! tapwalk: shortest TMS paths through the JTAG TAP controller
//!
//! The TAP controller is a sixteen-state machine clocked by a single control
//! input, TMS. Every state has exactly two outgoing edges, one per TMS value.
//! This crate models that graph, finds the shortest TMS sequence between any
//! two states and serializes the complete table of those sequences so that a
//! downstream driver can embed it as a constant.
//!
//! # Core Concepts
//!
//! - **State**: the closed [`TapState`] enumeration
//! - **Graph**: the fixed [`TransitionTable`] successor function
//! - **Path**: an ordered sequence of TMS values, see [`Path`]
//! - **Result table**: all 256 shortest paths, see [`ResultTable`]
//!
//! # Example
//!
//! ```rust
//! use tapwalk::{shortest_path, ResultTable, TapState};
//!
//! let path = shortest_path(TapState::SelectDR, TapState::SelectIR).unwrap();
//! assert_eq!(path.signals(), &[true]);
//!
//! let table = ResultTable::build().unwrap();
//! assert_eq!(table.len(), 256);
//! assert_eq!(
//!     table.get(TapState::ShiftDR, TapState::ShiftIR).signals(),
//!     &[true, true, true, true, false, false]
//! );
//! ```

pub mod core;
pub mod emit;
pub mod search;
pub mod table;

// Re-export commonly used types
pub use core::{successors, Path, TapState, TransitionTable, Walk, RESET_SEQUENCE};
pub use emit::{EmitOptions, Format, TableArtifact};
pub use search::{shortest_path, PathFinder, SearchError};
pub use table::{ResultTable, TableError};
