//! Error types for layerconf.
//!
//! Uses thiserror for derive macros. Every variant carries a user-facing
//! message and maps to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for layerconf operations.
#[derive(Error, Debug)]
pub enum LayerConfError {
    /// User provided invalid arguments or referenced something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// A file could not be read, written or removed.
    #[error("I/O failure: {0}")]
    IoError(String),

    /// A document is not syntactically valid.
    #[error("Parse failure: {0}")]
    ParseError(String),

    /// A document parsed but violates the layout of its format version.
    #[error("Invalid configuration format: {0}")]
    FormatError(String),

    /// A layer schema was required but the layer is not registered.
    #[error("Layer '{0}' is not registered")]
    LayerNotRegistered(String),
}

impl LayerConfError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LayerConfError::UserError(_) => exit_codes::USER_ERROR,
            LayerConfError::IoError(_) => exit_codes::IO_FAILURE,
            LayerConfError::ParseError(_) => exit_codes::PARSE_FAILURE,
            LayerConfError::FormatError(_) => exit_codes::FORMAT_FAILURE,
            LayerConfError::LayerNotRegistered(_) => exit_codes::USER_ERROR,
        }
    }

    /// Shorthand for a format error.
    pub(crate) fn format(message: impl Into<String>) -> Self {
        LayerConfError::FormatError(message.into())
    }
}

/// Result type alias for layerconf operations.
pub type Result<T> = std::result::Result<T, LayerConfError>;
