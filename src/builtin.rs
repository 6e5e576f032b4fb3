//! Built-in configurations bundled with the application.
//!
//! Built-ins are read-only documents. [`crate::configuration::Configuration::reset`]
//! restores a configuration from the built-in of the same name when one exists.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A bundled configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinConfiguration {
    /// File stem, equal to the configuration name.
    pub name: String,
    pub path: PathBuf,
}

/// Enumerates the bundled configuration documents.
pub trait BuiltinConfigurations {
    fn list(&self) -> Vec<BuiltinConfiguration>;

    fn find(&self, name: &str) -> Option<BuiltinConfiguration> {
        self.list().into_iter().find(|builtin| builtin.name == name)
    }
}

/// Built-ins stored as `*.json` files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryBuiltins {
    dir: PathBuf,
}

impl DirectoryBuiltins {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BuiltinConfigurations for DirectoryBuiltins {
    fn list(&self) -> Vec<BuiltinConfiguration> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut builtins: Vec<BuiltinConfiguration> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "failed to read built-in entry");
                    None
                }
            })
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .filter_map(|path| {
                let name = path.file_stem()?.to_str()?.to_string();
                Some(BuiltinConfiguration { name, path })
            })
            .collect();

        builtins.sort_by(|a, b| a.name.cmp(&b.name));
        builtins
    }
}

/// In-memory list of built-ins, for callers that bundle documents elsewhere.
impl BuiltinConfigurations for [BuiltinConfiguration] {
    fn list(&self) -> Vec<BuiltinConfiguration> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_json_files_by_stem() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Validation.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("API dump.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("README.md"), "docs").unwrap();

        let builtins = DirectoryBuiltins::new(temp_dir.path());
        let names: Vec<String> = builtins.list().into_iter().map(|b| b.name).collect();

        assert_eq!(names, vec!["API dump", "Validation"]);
        assert!(builtins.find("Validation").is_some());
        assert!(builtins.find("Frame Capture").is_none());
    }

    #[test]
    fn test_missing_directory_has_no_builtins() {
        let temp_dir = TempDir::new().unwrap();
        let builtins = DirectoryBuiltins::new(temp_dir.path().join("missing"));
        assert!(builtins.list().is_empty());
    }
}
