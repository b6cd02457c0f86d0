//! TMS sequences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Ordered sequence of TMS values, one per clock edge.
///
/// `false` is TMS=0 and `true` is TMS=1. The empty path is valid and means
/// "stay where you are".
///
/// # Example
///
/// ```rust
/// use tapwalk::Path;
///
/// let path: Path = [true, false, false].into_iter().collect();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "100");
/// assert_eq!(Path::empty().to_string(), "ε");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<bool>);

impl Path {
    /// The zero-length path.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The TMS values in clocking order.
    pub fn signals(&self) -> &[bool] {
        &self.0
    }

    /// A new path with `tms` appended. `self` is left untouched.
    pub fn with_signal(&self, tms: bool) -> Self {
        let mut signals = Vec::with_capacity(self.0.len() + 1);
        signals.extend_from_slice(&self.0);
        signals.push(tms);
        Self(signals)
    }

    /// Append every signal of `other`.
    pub fn extend_from(&mut self, other: &Path) {
        self.0.extend_from_slice(&other.0);
    }

    /// Consume the path, returning the raw signals.
    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl Deref for Path {
    type Target = [bool];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<bool>> for Path {
    fn from(signals: Vec<bool>) -> Self {
        Self(signals)
    }
}

impl FromIterator<bool> for Path {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("ε");
        }
        for &tms in &self.0 {
            f.write_str(if tms { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_signal_is_pure() {
        let path = Path::from(vec![true]);
        let longer = path.with_signal(false);

        assert_eq!(path.signals(), &[true]);
        assert_eq!(longer.signals(), &[true, false]);
    }

    #[test]
    fn extend_from_concatenates() {
        let mut path = Path::from(vec![false]);
        path.extend_from(&Path::from(vec![true, true]));
        path.extend_from(&Path::empty());

        assert_eq!(path.into_inner(), vec![false, true, true]);
    }

    #[test]
    fn display_uses_binary_digits() {
        assert_eq!(Path::from(vec![true, true, false]).to_string(), "110");
        assert_eq!(Path::empty().to_string(), "ε");
    }

    #[test]
    fn path_serializes_as_plain_array() {
        let path = Path::from(vec![false, true]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[false,true]");

        let deserialized: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, path);
    }
}
