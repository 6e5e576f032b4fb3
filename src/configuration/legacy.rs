//! Parser for documents older than format 2.1.0.
//!
//! ```text
//! {
//!     "file_format_version": "2.0.2",
//!     "Validation": {
//!         "name": "Validation",
//!         "description": "...",
//!         "editor_state": "...",
//!         "layer_options": {
//!             "VK_LAYER_KHRONOS_validation": {
//!                 "layer_rank": 0,
//!                 "log_filename": { "type": "save_file", "default": "stdout" }
//!             }
//!         },
//!         "blacklisted_layers": [ "VK_LAYER_LUNARG_api_dump" ]
//!     }
//! }
//! ```

use super::Configuration;
use super::format::FILE_FORMAT_VERSION;
use super::parameter::{LayerState, Parameter, find_parameter_mut, rank_from_disk};
use crate::error::{LayerConfError, Result};
use crate::layer::LayerRegistry;
use crate::platform::PlatformFlags;
use crate::settings::{SettingDataSet, SettingKind, SettingValue, collect_default_setting_data};
use crate::version::Version;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{error, warn};

/// Name given to a configuration whose stored name is empty.
pub const PLACEHOLDER_NAME: &str = "Configuration";

const LAYER_RANK: &str = "layer_rank";

pub(super) fn parse<R: LayerRegistry + ?Sized>(
    configuration: &mut Configuration,
    available_layers: &R,
    root: &Map<String, Value>,
    version: Version,
    path: &Path,
) -> Result<()> {
    let (entry_key, entry_value) = root
        .iter()
        .find(|(key, _)| key.as_str() != FILE_FORMAT_VERSION)
        .ok_or_else(|| LayerConfError::format("document has no configuration entry"))?;

    let entry = entry_value.as_object().ok_or_else(|| {
        LayerConfError::format(format!("configuration entry '{}' is not an object", entry_key))
    })?;

    // Before 2.0.2 the entry key was the only place the name was stored.
    configuration.key = if version <= Version::UNVERSIONED {
        entry_key.clone()
    } else {
        optional_str(entry, "name")?.unwrap_or_default().to_string()
    };

    if configuration.key.is_empty() {
        configuration.key = PLACEHOLDER_NAME.to_string();
        warn!(path = %path.display(), "configuration has an empty name, deleting file");
        if let Err(e) = std::fs::remove_file(path) {
            error!(path = %path.display(), error = %e, "failed to delete corrupt configuration");
        }
    }

    configuration.setting_tree_state = optional_str(entry, "editor_state")?
        .unwrap_or_default()
        .to_string();
    configuration.description = optional_str(entry, "description")?
        .unwrap_or_default()
        .to_string();

    if let Some(tokens) = optional_string_array(entry, "platforms")? {
        configuration.platform_flags = PlatformFlags::from_tokens(&tokens);
    }

    let layer_options = entry
        .get("layer_options")
        .and_then(Value::as_object)
        .ok_or_else(|| LayerConfError::format("missing 'layer_options' object"))?;

    for (layer_key, layer_value) in layer_options {
        let layer_object = layer_value.as_object().ok_or_else(|| {
            LayerConfError::format(format!("layer '{}' options are not an object", layer_key))
        })?;
        configuration
            .parameters
            .push(parse_layer(available_layers, layer_key, layer_object)?);
    }

    let excluded = optional_string_array(entry, "blacklisted_layers")?
        .ok_or_else(|| LayerConfError::format("missing 'blacklisted_layers' array"))?;

    for layer_key in excluded {
        match find_parameter_mut(&mut configuration.parameters, &layer_key) {
            Some(parameter) => parameter.state = LayerState::Excluded,
            None => configuration
                .parameters
                .push(Parameter::new(layer_key, LayerState::Excluded)),
        }
    }

    Ok(())
}

fn parse_layer<R: LayerRegistry + ?Sized>(
    available_layers: &R,
    layer_key: &str,
    layer_object: &Map<String, Value>,
) -> Result<Parameter> {
    let mut parameter = Parameter::new(layer_key, LayerState::Overridden);

    if let Some(rank) = layer_object.get(LAYER_RANK) {
        let rank = rank.as_i64().ok_or_else(|| {
            LayerConfError::format(format!("layer '{}' has a non-integer rank", layer_key))
        })?;
        parameter.overridden_rank = rank_from_disk(rank)?;
    }

    parameter.settings = available_layers
        .find_layer(layer_key)
        .map(|layer| collect_default_setting_data(&layer.settings))
        .unwrap_or_else(SettingDataSet::new);

    for (setting_key, setting_value) in layer_object {
        if setting_key == LAYER_RANK {
            continue;
        }

        let invalid = |what: &str| {
            LayerConfError::format(format!(
                "layer '{}' setting '{}' {}",
                layer_key, setting_key, what
            ))
        };

        let setting_object = setting_value
            .as_object()
            .ok_or_else(|| invalid("is not an object"))?;
        let token = setting_object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("has no type"))?;
        let kind = SettingKind::from_token(token)
            .ok_or_else(|| invalid(&format!("has unknown type '{}'", token)))?;
        let default = setting_object
            .get("default")
            .ok_or_else(|| invalid("has no default"))?;

        let value = SettingValue::from_legacy_text(kind, default)?;
        parameter.settings.create(setting_key, kind).set_value(value)?;
    }

    Ok(parameter)
}

fn optional_str<'a>(object: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(LayerConfError::format(format!("'{}' must be a string", key))),
    }
}

fn optional_string_array(object: &Map<String, Value>, key: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = object.get(key) else {
        return Ok(None);
    };

    let not_strings = || LayerConfError::format(format!("'{}' must be an array of strings", key));
    value
        .as_array()
        .ok_or_else(not_strings)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(not_strings))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
