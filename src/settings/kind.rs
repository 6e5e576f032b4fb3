//! Setting kinds and their on-disk type tokens.

use std::fmt;

/// The type of a setting, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    String,
    Integer,
    Boolean,
    /// Boolean stored as `"1"`/`"0"` by old layers.
    LegacyNumericBoolean,
    Enum,
    FlagSet,
    /// List of message identifiers to filter out.
    FilterExpression,
    SaveFilePath,
    LoadFilePath,
    SaveFolderPath,
}

impl SettingKind {
    pub const ALL: [SettingKind; 10] = [
        SettingKind::String,
        SettingKind::Integer,
        SettingKind::Boolean,
        SettingKind::LegacyNumericBoolean,
        SettingKind::Enum,
        SettingKind::FlagSet,
        SettingKind::FilterExpression,
        SettingKind::SaveFilePath,
        SettingKind::LoadFilePath,
        SettingKind::SaveFolderPath,
    ];

    /// Token written in the `type` member of a setting.
    pub fn token(self) -> &'static str {
        match self {
            SettingKind::String => "STRING",
            SettingKind::Integer => "INT",
            SettingKind::Boolean => "BOOL",
            SettingKind::LegacyNumericBoolean => "BOOL_NUMERIC",
            SettingKind::Enum => "ENUM",
            SettingKind::FlagSet => "FLAGS",
            SettingKind::FilterExpression => "VUID_EXCLUDE",
            SettingKind::SaveFilePath => "SAVE_FILE",
            SettingKind::LoadFilePath => "LOAD_FILE",
            SettingKind::SaveFolderPath => "SAVE_FOLDER",
        }
    }

    /// Parse a type token. Case-insensitive; accepts historical aliases.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.trim().to_ascii_uppercase();
        match upper.as_str() {
            "MULTI_ENUM" => Some(SettingKind::FlagSet),
            "BOOL_NUMERIC_DEPRECATED" => Some(SettingKind::LegacyNumericBoolean),
            other => SettingKind::ALL.into_iter().find(|k| k.token() == other),
        }
    }

    /// Whether values of this kind are lists of strings.
    pub fn is_list(self) -> bool {
        matches!(self, SettingKind::FlagSet | SettingKind::FilterExpression)
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
