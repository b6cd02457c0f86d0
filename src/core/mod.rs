//! Core model of the TAP controller.
//!
//! This module contains the pure part of the crate:
//! - The closed set of controller states
//! - The fixed successor function over those states
//! - TMS sequences and the walks they produce when replayed
//!
//! Nothing in here allocates beyond the paths and walks handed back to the
//! caller, and nothing can fail: the graph is total.

#[macro_use]
mod macros;

mod error;
mod graph;
mod path;
mod state;
mod walk;

pub use error::ParseStateError;
pub use graph::{successors, TransitionTable};
pub use path::Path;
pub use state::{TapState, RESET_SEQUENCE};
pub use walk::{Step, Walk};
