//! State parsing errors.

use thiserror::Error;

/// A string did not name any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown state name: {name:?}")]
pub struct ParseStateError {
    name: String,
}

impl ParseStateError {
    /// Create an error for the rejected input.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}
