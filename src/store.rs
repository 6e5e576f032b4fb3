//! Enumeration of saved configurations.

use crate::configuration::Configuration;
use crate::error::{LayerConfError, Result};
use crate::layer::LayerRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A configuration and the file it was loaded from.
#[derive(Debug, Clone)]
pub struct StoredConfiguration {
    pub configuration: Configuration,
    pub path: PathBuf,
}

/// Load every `*.json` configuration in `dir`, sorted by name.
///
/// A missing directory yields nothing. Files that fail to load are skipped
/// with a warning, as are later files reusing a name already loaded.
pub fn load_all<R, P>(dir: P, available_layers: &R) -> Result<Vec<StoredConfiguration>>
where
    R: LayerRegistry + ?Sized,
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!(dir = %dir.display(), "configuration directory does not exist");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        LayerConfError::IoError(format!(
            "failed to read configuration directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| LayerConfError::IoError(format!("failed to read directory entry: {}", e)))?
            .path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    // Directory order is unspecified; make "first one wins" deterministic.
    paths.sort();

    let mut stored: Vec<StoredConfiguration> = Vec::new();
    for path in paths {
        match Configuration::from_file(available_layers, &path) {
            Ok(configuration) => {
                if find_by_name(&stored, &configuration.key).is_some() {
                    warn!(name = %configuration.key, path = %path.display(), "duplicate configuration name ignored");
                } else {
                    stored.push(StoredConfiguration {
                        configuration,
                        path,
                    });
                }
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping configuration"),
        }
    }

    stored.sort_by(|a, b| a.configuration.key.cmp(&b.configuration.key));
    Ok(stored)
}

/// Look up a loaded configuration by name.
pub fn find_by_name<'a>(
    stored: &'a [StoredConfiguration],
    name: &str,
) -> Option<&'a StoredConfiguration> {
    stored.iter().find(|s| s.configuration.key == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use tempfile::TempDir;

    fn document(name: &str) -> String {
        format!(
            r#"{{
                "file_format_version": "2.2.0",
                "configuration": {{ "name": "{}", "layers": [] }}
            }}"#,
            name
        )
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let configurations = load_all(temp_dir.path().join("nope"), &sample_layers()).unwrap();
        assert!(configurations.is_empty());
    }

    #[test]
    fn test_loads_sorted_and_skips_broken_files() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "b.json", &document("Validation"));
        write_file(temp_dir.path(), "a.json", &document("API dump"));
        write_file(temp_dir.path(), "broken.json", "{ not json");
        write_file(temp_dir.path(), "notes.txt", "ignored");

        let configurations = load_all(temp_dir.path(), &sample_layers()).unwrap();

        let names: Vec<&str> = configurations
            .iter()
            .map(|s| s.configuration.key.as_str())
            .collect();
        assert_eq!(names, vec!["API dump", "Validation"]);
        assert_eq!(
            find_by_name(&configurations, "Validation").unwrap().path,
            temp_dir.path().join("b.json")
        );
        assert!(find_by_name(&configurations, "Frame capture").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first_file() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "a.json", &document("Validation"));
        write_file(temp_dir.path(), "b.json", &document("Validation"));

        let configurations = load_all(temp_dir.path(), &sample_layers()).unwrap();

        assert_eq!(configurations.len(), 1);
        assert_eq!(configurations[0].path, temp_dir.path().join("a.json"));
    }
}
