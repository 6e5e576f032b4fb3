//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the layerconf tool.
///
/// This struct represents the contents of `layerconf.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where configurations are saved and looked up first.
    #[serde(default = "default_configurations_dir")]
    pub configurations_dir: String,

    /// Storage root of older releases, searched after `configurations_dir`.
    #[serde(default = "default_legacy_configurations_dir")]
    pub legacy_configurations_dir: String,

    /// Read-only directory of bundled configurations.
    #[serde(default = "default_builtin_configurations_dir")]
    pub builtin_configurations_dir: String,

    /// Directory of layer manifests.
    #[serde(default = "default_layers_dir")]
    pub layers_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            configurations_dir: default_configurations_dir(),
            legacy_configurations_dir: default_legacy_configurations_dir(),
            builtin_configurations_dir: default_builtin_configurations_dir(),
            layers_dir: default_layers_dir(),
        }
    }
}
