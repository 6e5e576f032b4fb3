//! Exit code constants for the layerconf CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown configuration, unregistered layer)
//! - 2: I/O failure (file missing, unreadable or unwritable)
//! - 3: Parse failure (malformed JSON or YAML)
//! - 4: Format failure (recognized document with missing or invalid members)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown configuration name, unregistered layer.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a configuration or manifest file could not be read or written.
pub const IO_FAILURE: i32 = 2;

/// Parse failure: the document is not valid JSON (or YAML for the app config).
pub const PARSE_FAILURE: i32 = 3;

/// Format failure: the document parsed but does not match its schema generation.
pub const FORMAT_FAILURE: i32 = 4;
