//! Detection of the on-disk schema generation.

use crate::error::{LayerConfError, Result};
use crate::version::Version;
use serde_json::{Map, Value};

/// Key of the version member at the document root.
pub(crate) const FILE_FORMAT_VERSION: &str = "file_format_version";

/// The three historical layouts of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaGeneration {
    /// Before 2.1.0: configuration keyed by name, layers in a map, exclusions
    /// in `blacklisted_layers`, settings inline with textual defaults.
    Legacy,
    /// 2.1.x: `configuration` object with a `layers` array; setting type
    /// tokens may be missing.
    Layered,
    /// 2.2.0 and later.
    Current,
}

impl SchemaGeneration {
    pub fn from_version(version: Version) -> Self {
        if version < Version::new(2, 1, 0) {
            SchemaGeneration::Legacy
        } else if version < Version::new(2, 2, 0) {
            SchemaGeneration::Layered
        } else {
            SchemaGeneration::Current
        }
    }
}

/// Read `file_format_version`; documents without one predate versioning.
pub(crate) fn document_version(root: &Map<String, Value>) -> Result<Version> {
    match root.get(FILE_FORMAT_VERSION) {
        None => Ok(Version::UNVERSIONED),
        Some(Value::String(text)) => text.parse(),
        Some(other) => Err(LayerConfError::format(format!(
            "'{}' must be a string, found {}",
            FILE_FORMAT_VERSION, other
        ))),
    }
}
