//! Filesystem helpers for layerconf.
//!
//! Configuration files are small documents that are read whole and written
//! whole. Writes go through [`atomic_write_file`] so a failed save never leaves
//! a truncated document behind.

mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{LayerConfError, Result};
use std::path::Path;

/// Read a whole text file, mapping failures to [`LayerConfError::IoError`].
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        LayerConfError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })
}
