//! Layer schemas.
//!
//! A [`Layer`] is the declaration of a runtime layer: its name and the
//! settings it accepts. Configurations only ever look layers up by name
//! through [`LayerRegistry`]; a name that is not registered is legal and
//! simply has no schema defaults.
//!
//! Schemas are read from manifest files:
//!
//! ```text
//! {
//!     "file_format_version": "1.2.0",
//!     "layer": {
//!         "name": "VK_LAYER_KHRONOS_validation",
//!         "description": "Khronos validation",
//!         "settings": [
//!             { "key": "log_filename", "type": "SAVE_FILE", "default": "stdout" }
//!         ]
//!     }
//! }
//! ```

use crate::error::{LayerConfError, Result};
use crate::settings::{SettingKind, SettingMeta, SettingValue};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A layer and its declared settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub key: String,
    pub description: String,
    pub settings: Vec<SettingMeta>,
}

/// Lookup of layer schemas by name.
pub trait LayerRegistry {
    fn find_layer(&self, key: &str) -> Option<&Layer>;
}

impl LayerRegistry for [Layer] {
    fn find_layer(&self, key: &str) -> Option<&Layer> {
        self.iter().find(|layer| layer.key == key)
    }
}

impl LayerRegistry for Vec<Layer> {
    fn find_layer(&self, key: &str) -> Option<&Layer> {
        self.as_slice().find_layer(key)
    }
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    layer: ManifestLayer,
}

#[derive(Debug, Deserialize)]
struct ManifestLayer {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    settings: Vec<ManifestSetting>,
}

#[derive(Debug, Deserialize)]
struct ManifestSetting {
    key: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    default: Value,
}

impl Layer {
    pub fn new(key: impl Into<String>, settings: Vec<SettingMeta>) -> Self {
        Self {
            key: key.into(),
            description: String::new(),
            settings,
        }
    }

    /// Parse a layer manifest document.
    pub fn from_manifest_json(json: &str) -> Result<Self> {
        let manifest: ManifestFile = serde_json::from_str(json)
            .map_err(|e| LayerConfError::ParseError(format!("invalid layer manifest: {}", e)))?;

        let layer = manifest.layer;
        if layer.name.is_empty() {
            return Err(LayerConfError::format("layer manifest has an empty name"));
        }

        let settings = layer
            .settings
            .into_iter()
            .map(|setting| {
                let kind = SettingKind::from_token(&setting.kind).ok_or_else(|| {
                    LayerConfError::format(format!(
                        "layer '{}' setting '{}' has unknown type '{}'",
                        layer.name, setting.key, setting.kind
                    ))
                })?;
                let default = if setting.default.is_null() {
                    SettingValue::empty(kind)
                } else {
                    SettingValue::from_json(kind, &setting.default)?
                };
                let mut meta = SettingMeta::new(setting.key, default);
                if let Some(label) = setting.label {
                    meta.label = label;
                }
                Ok(meta)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            key: layer.name,
            description: layer.description,
            settings,
        })
    }

    /// Load a layer manifest file.
    pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = crate::fs::read_text(path)?;
        Self::from_manifest_json(&content).map_err(|e| match e {
            LayerConfError::ParseError(msg) => {
                LayerConfError::ParseError(format!("{}: {}", path.display(), msg))
            }
            LayerConfError::FormatError(msg) => {
                LayerConfError::FormatError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Load every `*.json` layer manifest in `dir`, sorted by layer name.
///
/// A missing directory yields no layers. Manifests that fail to load are
/// skipped with a warning so one broken file does not hide the others.
pub fn load_layers_from_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<Layer>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!(dir = %dir.display(), "layer manifest directory does not exist");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        LayerConfError::IoError(format!(
            "failed to read layer directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut layers: Vec<Layer> = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| LayerConfError::IoError(format!("failed to read directory entry: {}", e)))?
            .path();

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match Layer::load_manifest(&path) {
            Ok(layer) => {
                if layers.find_layer(&layer.key).is_some() {
                    warn!(layer = %layer.key, path = %path.display(), "duplicate layer manifest ignored");
                } else {
                    layers.push(layer);
                }
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping layer manifest"),
        }
    }

    layers.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALIDATION_MANIFEST: &str = r#"{
        "file_format_version": "1.2.0",
        "layer": {
            "name": "VK_LAYER_KHRONOS_validation",
            "description": "Khronos validation",
            "settings": [
                { "key": "log_filename", "type": "SAVE_FILE", "default": "stdout" },
                { "key": "duplicate_message_limit", "type": "INT", "default": 10, "label": "Limit" },
                { "key": "report_flags", "type": "FLAGS", "default": ["error", "warn"] },
                { "key": "enable_message_limit", "type": "BOOL" }
            ]
        }
    }"#;

    #[test]
    fn test_parse_manifest() {
        let layer = Layer::from_manifest_json(VALIDATION_MANIFEST).unwrap();

        assert_eq!(layer.key, "VK_LAYER_KHRONOS_validation");
        assert_eq!(layer.description, "Khronos validation");
        assert_eq!(layer.settings.len(), 4);
        assert_eq!(layer.settings[1].label, "Limit");
        assert_eq!(layer.settings[1].default, SettingValue::Integer(10));
        assert_eq!(
            layer.settings[2].default,
            SettingValue::FlagSet(vec!["error".to_string(), "warn".to_string()])
        );
        assert_eq!(layer.settings[3].default, SettingValue::Boolean(false));
    }

    #[test]
    fn test_manifest_with_unknown_type_is_rejected() {
        let json = r#"{ "layer": { "name": "L", "settings": [ { "key": "k", "type": "FLOAT" } ] } }"#;
        let err = Layer::from_manifest_json(json).unwrap_err();
        assert!(matches!(err, LayerConfError::FormatError(_)));
    }

    #[test]
    fn test_malformed_manifest_is_a_parse_error() {
        let err = Layer::from_manifest_json("{ not json").unwrap_err();
        assert!(matches!(err, LayerConfError::ParseError(_)));
    }

    #[test]
    fn test_registry_lookup() {
        let layers = vec![
            Layer::new("VK_LAYER_LUNARG_api_dump", Vec::new()),
            Layer::new("VK_LAYER_KHRONOS_validation", Vec::new()),
        ];

        assert!(layers.find_layer("VK_LAYER_LUNARG_api_dump").is_some());
        assert!(layers.find_layer("VK_LAYER_UNKNOWN").is_none());
    }

    #[test]
    fn test_load_layers_from_dir_skips_broken_manifests() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("validation.json"), VALIDATION_MANIFEST).unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let layers = load_layers_from_dir(temp_dir.path()).unwrap();

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].key, "VK_LAYER_KHRONOS_validation");
    }

    #[test]
    fn test_load_layers_from_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let layers = load_layers_from_dir(temp_dir.path().join("missing")).unwrap();
        assert!(layers.is_empty());
    }
}
