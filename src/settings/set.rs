//! Ordered per-layer setting collections.

use super::kind::SettingKind;
use super::value::{SettingData, SettingMeta, SettingValue};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `{ key, type, value }` object of a layer's `settings` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,

    /// Type token. Older writers omitted it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub value: Value,
}

/// Ordered settings of one layer, keys unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingDataSet {
    data: Vec<SettingData>,
}

/// Build a set holding the default value of every declared setting.
pub fn collect_default_setting_data(schema: &[SettingMeta]) -> SettingDataSet {
    SettingDataSet {
        data: schema
            .iter()
            .map(|meta| SettingData::new(meta.key.clone(), meta.default.clone()))
            .collect(),
    }
}

impl SettingDataSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingData> {
        self.data.iter()
    }

    pub fn get(&self, key: &str) -> Option<&SettingData> {
        self.data.iter().find(|d| d.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SettingData> {
        self.data.iter_mut().find(|d| d.key() == key)
    }

    /// Insert-or-return the entry for `key`.
    ///
    /// An existing entry of another kind is replaced by the empty value of
    /// `kind`, so the kind read from a document wins over the declared one.
    pub fn create(&mut self, key: &str, kind: SettingKind) -> &mut SettingData {
        let index = match self.data.iter().position(|d| d.key() == key) {
            Some(index) => {
                if self.data[index].kind() != kind {
                    self.data[index] = SettingData::new(key, SettingValue::empty(kind));
                }
                index
            }
            None => {
                self.data.push(SettingData::new(key, SettingValue::empty(kind)));
                self.data.len() - 1
            }
        };
        &mut self.data[index]
    }

    /// Store the value of a document entry, decoded as `kind`.
    pub fn apply_entry(&mut self, entry: &SettingEntry, kind: SettingKind) -> Result<()> {
        let value = SettingValue::from_json(kind, &entry.value)?;
        self.create(&entry.key, kind).set_value(value)
    }

    pub fn to_entries(&self) -> Vec<SettingEntry> {
        self.data
            .iter()
            .map(|d| SettingEntry {
                key: d.key().to_string(),
                kind: Some(d.kind().token().to_string()),
                value: d.value().to_json(),
            })
            .collect()
    }
}
