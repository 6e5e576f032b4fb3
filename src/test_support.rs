use crate::layer::Layer;
use crate::settings::{SettingMeta, SettingValue};
use std::path::{Path, PathBuf};

pub(crate) const VALIDATION: &str = "VK_LAYER_KHRONOS_validation";
pub(crate) const API_DUMP: &str = "VK_LAYER_LUNARG_api_dump";
pub(crate) const MONITOR: &str = "VK_LAYER_LUNARG_monitor";

pub(crate) fn validation_layer() -> Layer {
    Layer::new(
        VALIDATION,
        vec![
            SettingMeta::new("log_filename", SettingValue::SaveFilePath("stdout".to_string())),
            SettingMeta::new("duplicate_message_limit", SettingValue::Integer(10)),
            SettingMeta::new(
                "report_flags",
                SettingValue::FlagSet(vec!["error".to_string(), "warn".to_string()]),
            ),
            SettingMeta::new("enable_message_limit", SettingValue::Boolean(true)),
        ],
    )
}

pub(crate) fn api_dump_layer() -> Layer {
    Layer::new(
        API_DUMP,
        vec![
            SettingMeta::new("output_format", SettingValue::Enum("Text".to_string())),
            SettingMeta::new("detailed", SettingValue::Boolean(true)),
        ],
    )
}

pub(crate) fn monitor_layer() -> Layer {
    Layer::new(MONITOR, Vec::new())
}

/// Validation, API dump and monitor layers.
pub(crate) fn sample_layers() -> Vec<Layer> {
    vec![validation_layer(), api_dump_layer(), monitor_layer()]
}

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
