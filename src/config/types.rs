//! Constants and default value functions used by the Config struct.

use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "layerconf.yaml";

/// Per-user data root, `.` when the platform has none.
pub fn data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("layerconf")
}

fn data_subdir(name: &str) -> String {
    data_root().join(name).to_string_lossy().into_owned()
}

pub(crate) fn default_configurations_dir() -> String {
    data_subdir("configurations")
}

pub(crate) fn default_legacy_configurations_dir() -> String {
    data_subdir("legacy")
}

pub(crate) fn default_builtin_configurations_dir() -> String {
    data_subdir("builtin")
}

pub(crate) fn default_layers_dir() -> String {
    data_subdir("layers")
}
