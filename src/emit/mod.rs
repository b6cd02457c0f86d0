//! Serialization of the result table.
//!
//! A table leaves the crate in one of three shapes: Rust source that a
//! driver compiles in as a constant function, or a [`TableArtifact`] encoded
//! as JSON or bincode. Artifacts carry a small envelope (format version,
//! identifier, generation time) around the nested start -> end -> path map;
//! only the envelope changes between regenerations.

pub mod error;
pub mod options;
pub mod rust;

pub use error::{ConfigError, EmitError};
pub use options::{EmitOptions, EmitOptionsBuilder, Format};
pub use rust::render_rust;

use crate::core::TransitionTable;
use crate::table::{NestedTable, ResultTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;
use uuid::Uuid;

/// Version identifier for artifact format
pub const ARTIFACT_VERSION: u32 = 1;

/// Serializable form of a result table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableArtifact {
    /// Artifact format version
    pub version: u32,

    /// Unique artifact identifier
    pub id: Uuid,

    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,

    /// Length of the longest path in the table
    pub diameter: usize,

    /// Shortest path for every ordered pair, keyed by start then end
    pub transitions: NestedTable,
}

impl TableArtifact {
    /// Wrap `table` in a fresh envelope.
    pub fn new(table: &ResultTable) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            diameter: table.diameter(),
            transitions: table.to_nested(),
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EmitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EmitError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, EmitError> {
        let artifact: Self = serde_json::from_str(json)
            .map_err(|e| EmitError::DeserializationFailed(e.to_string()))?;
        artifact.check_version()
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, EmitError> {
        bincode::serialize(self).map_err(|e| EmitError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode, rejecting unknown format versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, EmitError> {
        let artifact: Self = bincode::deserialize(bytes)
            .map_err(|e| EmitError::DeserializationFailed(e.to_string()))?;
        artifact.check_version()
    }

    /// Convert back into a [`ResultTable`], requiring every pair to be
    /// present and every cell to hold a shortest path of the standard
    /// controller.
    pub fn into_table(self) -> Result<ResultTable, EmitError> {
        let table = ResultTable::from_nested(self.transitions)?;
        table.verify(&TransitionTable::STANDARD)?;
        Ok(table)
    }

    fn check_version(self) -> Result<Self, EmitError> {
        if self.version == ARTIFACT_VERSION {
            Ok(self)
        } else {
            Err(EmitError::UnsupportedVersion {
                found: self.version,
                supported: ARTIFACT_VERSION,
            })
        }
    }
}

/// Render `table` fully in memory in the format `options` selects.
pub fn render(table: &ResultTable, options: &EmitOptions) -> Result<Vec<u8>, EmitError> {
    debug!(format = ?options.format(), "rendering table");
    match options.format() {
        Format::Rust => Ok(render_rust(table, options)?.into_bytes()),
        Format::Json => {
            let mut json = TableArtifact::new(table).to_json()?;
            json.push('\n');
            Ok(json.into_bytes())
        }
        Format::Binary => TableArtifact::new(table).to_binary(),
    }
}

/// Render `table` and write it to `writer`.
///
/// Nothing is written unless rendering succeeds, so a failure never leaves
/// a truncated artifact behind.
pub fn emit<W: Write>(
    table: &ResultTable,
    options: &EmitOptions,
    writer: &mut W,
) -> Result<usize, EmitError> {
    let bytes = render(table, options)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Path, TapState};
    use crate::table::TableError;

    #[test]
    fn json_artifact_round_trips() {
        let table = ResultTable::build().unwrap();
        let artifact = TableArtifact::new(&table);

        let json = artifact.to_json().unwrap();
        let restored = TableArtifact::from_json(&json).unwrap();

        assert_eq!(restored.id, artifact.id);
        assert_eq!(restored.diameter, 8);
        assert_eq!(restored.into_table().unwrap(), table);
    }

    #[test]
    fn binary_artifact_round_trips() {
        let table = ResultTable::build().unwrap();
        let artifact = TableArtifact::new(&table);

        let bytes = artifact.to_binary().unwrap();
        let restored = TableArtifact::from_binary(&bytes).unwrap();

        assert_eq!(restored.version, ARTIFACT_VERSION);
        assert_eq!(restored.id, artifact.id);
        assert_eq!(restored.into_table().unwrap(), table);
    }

    #[test]
    fn json_keys_are_state_names() {
        let table = ResultTable::build().unwrap();
        let json = TableArtifact::new(&table).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["transitions"]["SelectDR"]["SelectIR"],
            serde_json::json!([true])
        );
        assert_eq!(
            value["transitions"]["TestLogicReset"]["TestLogicReset"],
            serde_json::json!([])
        );
    }

    #[test]
    fn transitions_are_stable_across_regenerations() {
        let table = ResultTable::build().unwrap();
        let first = TableArtifact::new(&table);
        let second = TableArtifact::new(&table);

        assert_ne!(first.id, second.id);
        assert_eq!(first.transitions, second.transitions);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let table = ResultTable::build().unwrap();
        let mut artifact = TableArtifact::new(&table);
        artifact.version = ARTIFACT_VERSION + 1;
        let json = artifact.to_json().unwrap();

        assert!(matches!(
            TableArtifact::from_json(&json),
            Err(EmitError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            TableArtifact::from_json("{\"version\": 1}"),
            Err(EmitError::DeserializationFailed(_))
        ));
        assert!(matches!(
            TableArtifact::from_binary(&[0xff, 0x00]),
            Err(EmitError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn tampered_artifact_fails_validation() {
        let table = ResultTable::build().unwrap();
        let mut artifact = TableArtifact::new(&table);
        artifact
            .transitions
            .get_mut(&TapState::RunTestIdle)
            .unwrap()
            .insert(TapState::SelectDR, Path::from(vec![false]));

        assert!(matches!(
            artifact.into_table(),
            Err(EmitError::ValidationFailed(TableError::Invalid(_)))
        ));
    }

    #[test]
    fn emit_writes_the_rendered_bytes() {
        let table = ResultTable::build().unwrap();
        let options = EmitOptions::default();

        let mut out = Vec::new();
        let written = emit(&table, &options, &mut out).unwrap();

        assert_eq!(written, out.len());
        assert_eq!(out, render_rust(&table, &options).unwrap().into_bytes());
    }

    #[test]
    fn render_selects_format() {
        let table = ResultTable::build().unwrap();

        let json = render(&table, &EmitOptions::builder().format(Format::Json).build().unwrap())
            .unwrap();
        assert_eq!(json.first(), Some(&b'{'));
        assert_eq!(json.last(), Some(&b'\n'));

        let binary = render(
            &table,
            &EmitOptions::builder().format(Format::Binary).build().unwrap(),
        )
        .unwrap();
        assert!(TableArtifact::from_binary(&binary).is_ok());
    }
}
