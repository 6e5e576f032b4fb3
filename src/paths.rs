//! Resolution of configuration file locations.

use std::path::PathBuf;

/// Storage roots a configuration file can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Where configurations are saved today.
    Configuration,
    /// Where older releases saved configurations.
    ConfigurationLegacy,
}

impl PathKind {
    /// Lookup order when searching for a saved configuration.
    pub const SEARCH_ORDER: [PathKind; 2] = [PathKind::Configuration, PathKind::ConfigurationLegacy];
}

/// Maps a configuration name to a full file path.
pub trait PathResolver {
    fn full_path(&self, kind: PathKind, configuration_name: &str) -> PathBuf;
}

/// Directory-backed [`PathResolver`]: `{dir}/{name}.json`.
#[derive(Debug, Clone)]
pub struct PathManager {
    pub configurations_dir: PathBuf,
    pub legacy_configurations_dir: PathBuf,
}

impl PathManager {
    pub fn new(configurations_dir: impl Into<PathBuf>, legacy_configurations_dir: impl Into<PathBuf>) -> Self {
        Self {
            configurations_dir: configurations_dir.into(),
            legacy_configurations_dir: legacy_configurations_dir.into(),
        }
    }

    pub fn dir(&self, kind: PathKind) -> &PathBuf {
        match kind {
            PathKind::Configuration => &self.configurations_dir,
            PathKind::ConfigurationLegacy => &self.legacy_configurations_dir,
        }
    }
}

impl PathResolver for PathManager {
    fn full_path(&self, kind: PathKind, configuration_name: &str) -> PathBuf {
        self.dir(kind).join(format!("{}.json", configuration_name))
    }
}
