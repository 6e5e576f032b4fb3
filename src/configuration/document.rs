//! The `configuration` document layout used since format 2.1.0.
//!
//! ```text
//! {
//!     "file_format_version": "2.2.0",
//!     "configuration": {
//!         "name": "Validation",
//!         "description": "...",
//!         "platforms": [ "WINDOWS", "LINUX", "MACOS" ],
//!         "editor_state": "...",
//!         "layers": [
//!             {
//!                 "name": "VK_LAYER_KHRONOS_validation",
//!                 "rank": 0,
//!                 "state": "OVERRIDDEN",
//!                 "platforms": [ "WINDOWS", "LINUX", "MACOS" ],
//!                 "settings": [ { "key": "log_filename", "type": "SAVE_FILE", "value": "stdout" } ]
//!             }
//!         ]
//!     }
//! }
//! ```

use super::Configuration;
use super::format::SchemaGeneration;
use super::parameter::{LayerState, Parameter, find_parameter, rank_from_disk, rank_to_disk};
use crate::error::{LayerConfError, Result};
use crate::layer::{Layer, LayerRegistry};
use crate::platform::PlatformFlags;
use crate::settings::{SettingDataSet, SettingEntry, SettingKind, collect_default_setting_data};
use crate::version::Version;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ConfigurationDocument {
    pub file_format_version: String,
    pub configuration: ConfigurationBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ConfigurationBody {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,

    /// Editor state, stored verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub editor_state: String,

    pub layers: Vec<LayerEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct LayerEntry {
    pub name: String,
    pub rank: i64,
    pub state: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,

    #[serde(default)]
    pub settings: Vec<SettingEntry>,
}

/// `null` reads as an empty string, as in the pre-2.1.0 layout.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse a 2.1.x or 2.2.x document into `configuration`.
pub(super) fn parse<R: LayerRegistry + ?Sized>(
    configuration: &mut Configuration,
    available_layers: &R,
    mut root: Map<String, Value>,
    generation: SchemaGeneration,
) -> Result<()> {
    let body = root.remove("configuration").ok_or_else(|| {
        LayerConfError::format("not a configuration file: missing 'configuration' object")
    })?;
    let body: ConfigurationBody = serde_json::from_value(body)
        .map_err(|e| LayerConfError::format(format!("invalid 'configuration' object: {}", e)))?;

    configuration.key = body.name;
    configuration.description = body.description;
    configuration.setting_tree_state = body.editor_state;
    if let Some(tokens) = body.platforms {
        configuration.platform_flags = PlatformFlags::from_tokens(&tokens);
    }

    for entry in body.layers {
        if find_parameter(&configuration.parameters, &entry.name).is_some() {
            return Err(LayerConfError::format(format!(
                "layer '{}' is listed more than once",
                entry.name
            )));
        }
        let parameter = parse_layer(available_layers.find_layer(&entry.name), entry, generation)?;
        configuration.parameters.push(parameter);
    }

    Ok(())
}

fn parse_layer(
    layer: Option<&Layer>,
    entry: LayerEntry,
    generation: SchemaGeneration,
) -> Result<Parameter> {
    let state = LayerState::from_token(&entry.state).ok_or_else(|| {
        LayerConfError::format(format!(
            "layer '{}' has unknown state '{}'",
            entry.name, entry.state
        ))
    })?;

    let mut settings = layer
        .map(|layer| collect_default_setting_data(&layer.settings))
        .unwrap_or_else(SettingDataSet::new);

    for setting in &entry.settings {
        let kind = setting_kind(layer, &entry.name, setting, generation)?;
        settings.apply_entry(setting, kind)?;
    }

    Ok(Parameter {
        overridden_rank: rank_from_disk(entry.rank)?,
        state,
        platform_flags: entry
            .platforms
            .map(|tokens| PlatformFlags::from_tokens(&tokens))
            .unwrap_or_default(),
        settings,
        key: entry.name,
    })
}

/// The document's type token wins. 2.1.x files may omit it, in which case the
/// declared kind is used, or STRING for undeclared settings.
fn setting_kind(
    layer: Option<&Layer>,
    layer_key: &str,
    setting: &SettingEntry,
    generation: SchemaGeneration,
) -> Result<SettingKind> {
    match (&setting.kind, generation) {
        (Some(token), _) => SettingKind::from_token(token).ok_or_else(|| {
            LayerConfError::format(format!(
                "layer '{}' setting '{}' has unknown type '{}'",
                layer_key, setting.key, token
            ))
        }),
        (None, SchemaGeneration::Layered) => Ok(layer
            .and_then(|layer| layer.settings.iter().find(|meta| meta.key == setting.key))
            .map(|meta| meta.kind())
            .unwrap_or(SettingKind::String)),
        (None, _) => Err(LayerConfError::format(format!(
            "layer '{}' setting '{}' has no type",
            layer_key, setting.key
        ))),
    }
}

/// Build the current-format document for `configuration`.
pub(super) fn build(configuration: &Configuration) -> ConfigurationDocument {
    let layers = configuration
        .parameters
        .iter()
        .filter(|p| p.state != LayerState::ApplicationControlled)
        .map(|p| LayerEntry {
            name: p.key.clone(),
            rank: rank_to_disk(p.overridden_rank),
            state: p.state.token().to_string(),
            platforms: Some(p.platform_flags.tokens()),
            settings: p.settings.to_entries(),
        })
        .collect();

    ConfigurationDocument {
        file_format_version: Version::CURRENT.to_string(),
        configuration: ConfigurationBody {
            name: configuration.key.clone(),
            description: configuration.description.clone(),
            platforms: Some(configuration.platform_flags.tokens()),
            editor_state: configuration.setting_tree_state.clone(),
            layers,
        },
    }
}
