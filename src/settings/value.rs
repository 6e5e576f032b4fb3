//! Setting values, per-key setting data and setting declarations.

use super::kind::SettingKind;
use crate::error::{LayerConfError, Result};
use serde_json::Value;

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    LegacyNumericBoolean(bool),
    Enum(String),
    FlagSet(Vec<String>),
    FilterExpression(Vec<String>),
    SaveFilePath(String),
    LoadFilePath(String),
    SaveFolderPath(String),
}

impl SettingValue {
    /// Zero value of a kind: empty text, `0`, `false` or an empty list.
    pub fn empty(kind: SettingKind) -> Self {
        match kind {
            SettingKind::String => SettingValue::String(String::new()),
            SettingKind::Integer => SettingValue::Integer(0),
            SettingKind::Boolean => SettingValue::Boolean(false),
            SettingKind::LegacyNumericBoolean => SettingValue::LegacyNumericBoolean(false),
            SettingKind::Enum => SettingValue::Enum(String::new()),
            SettingKind::FlagSet => SettingValue::FlagSet(Vec::new()),
            SettingKind::FilterExpression => SettingValue::FilterExpression(Vec::new()),
            SettingKind::SaveFilePath => SettingValue::SaveFilePath(String::new()),
            SettingKind::LoadFilePath => SettingValue::LoadFilePath(String::new()),
            SettingKind::SaveFolderPath => SettingValue::SaveFolderPath(String::new()),
        }
    }

    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::String(_) => SettingKind::String,
            SettingValue::Integer(_) => SettingKind::Integer,
            SettingValue::Boolean(_) => SettingKind::Boolean,
            SettingValue::LegacyNumericBoolean(_) => SettingKind::LegacyNumericBoolean,
            SettingValue::Enum(_) => SettingKind::Enum,
            SettingValue::FlagSet(_) => SettingKind::FlagSet,
            SettingValue::FilterExpression(_) => SettingKind::FilterExpression,
            SettingValue::SaveFilePath(_) => SettingKind::SaveFilePath,
            SettingValue::LoadFilePath(_) => SettingKind::LoadFilePath,
            SettingValue::SaveFolderPath(_) => SettingKind::SaveFolderPath,
        }
    }

    /// JSON representation used by the `value` member of a setting entry.
    pub fn to_json(&self) -> Value {
        match self {
            SettingValue::String(s)
            | SettingValue::Enum(s)
            | SettingValue::SaveFilePath(s)
            | SettingValue::LoadFilePath(s)
            | SettingValue::SaveFolderPath(s) => Value::String(s.clone()),
            SettingValue::Integer(i) => Value::from(*i),
            SettingValue::Boolean(b) | SettingValue::LegacyNumericBoolean(b) => Value::Bool(*b),
            SettingValue::FlagSet(list) | SettingValue::FilterExpression(list) => {
                Value::Array(list.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Decode the `value` member of a setting entry as `kind`.
    ///
    /// Accepts the shapes written by [`SettingValue::to_json`] plus the text
    /// forms older writers used (`"42"`, `"TRUE"`, `"1"`, `"a,b"`).
    pub fn from_json(kind: SettingKind, value: &Value) -> Result<Self> {
        let mismatch = || {
            LayerConfError::format(format!("value {} is not a valid {} setting", value, kind))
        };

        let parsed = match kind {
            SettingKind::Integer => match value {
                Value::Number(n) => SettingValue::Integer(n.as_i64().ok_or_else(mismatch)?),
                Value::String(s) => SettingValue::Integer(parse_integer(s)?),
                _ => return Err(mismatch()),
            },
            SettingKind::Boolean => match value {
                Value::Bool(b) => SettingValue::Boolean(*b),
                Value::String(s) if s.eq_ignore_ascii_case("TRUE") => SettingValue::Boolean(true),
                Value::String(s) if s.eq_ignore_ascii_case("FALSE") => {
                    SettingValue::Boolean(false)
                }
                _ => return Err(mismatch()),
            },
            SettingKind::LegacyNumericBoolean => match value {
                Value::Bool(b) => SettingValue::LegacyNumericBoolean(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => SettingValue::LegacyNumericBoolean(false),
                    Some(1) => SettingValue::LegacyNumericBoolean(true),
                    _ => return Err(mismatch()),
                },
                Value::String(s) if s == "1" => SettingValue::LegacyNumericBoolean(true),
                Value::String(s) if s == "0" => SettingValue::LegacyNumericBoolean(false),
                _ => return Err(mismatch()),
            },
            SettingKind::FlagSet | SettingKind::FilterExpression => {
                let list = match value {
                    Value::Array(items) => items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string).ok_or_else(mismatch))
                        .collect::<Result<Vec<_>>>()?,
                    Value::String(s) => split_list(s),
                    _ => return Err(mismatch()),
                };
                SettingValue::list(kind, list)
            }
            _ => {
                let text = value.as_str().ok_or_else(mismatch)?.to_string();
                SettingValue::text(kind, text)
            }
        };

        Ok(parsed)
    }

    /// Decode the textual `default` member of a setting in the oldest format.
    pub fn from_legacy_text(kind: SettingKind, value: &Value) -> Result<Self> {
        if kind.is_list() && value.is_array() {
            return SettingValue::from_json(kind, value);
        }

        let text = value.as_str().ok_or_else(|| {
            LayerConfError::format(format!("legacy {} setting default must be text", kind))
        })?;

        let parsed = match kind {
            SettingKind::Integer => SettingValue::Integer(parse_integer(text)?),
            SettingKind::Boolean => SettingValue::Boolean(text == "TRUE"),
            SettingKind::LegacyNumericBoolean => SettingValue::LegacyNumericBoolean(text == "1"),
            SettingKind::FlagSet | SettingKind::FilterExpression => {
                SettingValue::list(kind, split_list(text))
            }
            _ => SettingValue::text(kind, text.to_string()),
        };

        Ok(parsed)
    }

    fn text(kind: SettingKind, text: String) -> Self {
        match kind {
            SettingKind::Enum => SettingValue::Enum(text),
            SettingKind::SaveFilePath => SettingValue::SaveFilePath(text),
            SettingKind::LoadFilePath => SettingValue::LoadFilePath(text),
            SettingKind::SaveFolderPath => SettingValue::SaveFolderPath(text),
            _ => SettingValue::String(text),
        }
    }

    fn list(kind: SettingKind, list: Vec<String>) -> Self {
        match kind {
            SettingKind::FilterExpression => SettingValue::FilterExpression(list),
            _ => SettingValue::FlagSet(list),
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::String(s)
            | SettingValue::Enum(s)
            | SettingValue::SaveFilePath(s)
            | SettingValue::LoadFilePath(s)
            | SettingValue::SaveFolderPath(s) => write!(f, "{}", s),
            SettingValue::Integer(i) => write!(f, "{}", i),
            SettingValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            SettingValue::LegacyNumericBoolean(b) => write!(f, "{}", if *b { "1" } else { "0" }),
            SettingValue::FlagSet(list) | SettingValue::FilterExpression(list) => {
                write!(f, "{}", list.join(","))
            }
        }
    }
}

fn parse_integer(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        LayerConfError::format(format!("'{}' is not a valid integer setting value", text))
    })
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The stored value of one setting of one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingData {
    key: String,
    value: SettingValue,
}

impl SettingData {
    pub fn new(key: impl Into<String>, value: SettingValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> SettingKind {
        self.value.kind()
    }

    pub fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Replace the payload. The new value must have the same kind.
    pub fn set_value(&mut self, value: SettingValue) -> Result<()> {
        if value.kind() != self.kind() {
            return Err(LayerConfError::UserError(format!(
                "setting '{}' is {} and cannot hold a {} value",
                self.key,
                self.kind(),
                value.kind()
            )));
        }
        self.value = value;
        Ok(())
    }
}

/// Declaration of one setting in a layer's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingMeta {
    pub key: String,
    /// Human readable name, shown by editors.
    pub label: String,
    pub default: SettingValue,
}

impl SettingMeta {
    pub fn new(key: impl Into<String>, default: SettingValue) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            default,
        }
    }

    pub fn kind(&self) -> SettingKind {
        self.default.kind()
    }
}
