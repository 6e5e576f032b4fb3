//! Typed layer settings.
//!
//! A layer declares its settings as [`SettingMeta`] entries (the schema). A
//! configuration stores one [`SettingDataSet`] per layer parameter holding the
//! chosen [`SettingValue`] for each key.
//!
//! Values are a closed sum type: the [`SettingKind`] of a value never changes
//! after creation, only its payload.

mod kind;
mod set;
mod value;


pub use kind::SettingKind;
pub use set::{SettingDataSet, SettingEntry, collect_default_setting_data};
pub use value::{SettingData, SettingMeta, SettingValue};
