//! Config loading, validation, and the services built from it.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::builtin::DirectoryBuiltins;
use crate::error::{LayerConfError, Result};
use crate::layer::{Layer, load_layers_from_dir};
use crate::paths::PathManager;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LayerConfError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config named on the command line, or `layerconf.yaml` in the
    /// working directory if it exists, or the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                LayerConfError::ParseError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LayerConfError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Every directory must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let dirs = [
            ("configurations_dir", &self.configurations_dir),
            ("legacy_configurations_dir", &self.legacy_configurations_dir),
            ("builtin_configurations_dir", &self.builtin_configurations_dir),
            ("layers_dir", &self.layers_dir),
        ];

        for (field, value) in dirs {
            if value.trim().is_empty() {
                return Err(LayerConfError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Resolver over the current and legacy storage roots.
    pub fn paths(&self) -> PathManager {
        PathManager::new(&self.configurations_dir, &self.legacy_configurations_dir)
    }

    pub fn builtins(&self) -> DirectoryBuiltins {
        DirectoryBuiltins::new(&self.builtin_configurations_dir)
    }

    /// Read every layer manifest in `layers_dir`.
    pub fn load_layers(&self) -> Result<Vec<Layer>> {
        load_layers_from_dir(&self.layers_dir)
    }
}
