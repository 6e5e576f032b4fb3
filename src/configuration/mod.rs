//! Layer configurations.
//!
//! A [`Configuration`] is a named set of layer overrides: which layers are
//! forced on (and in what order), which are forced off, and the settings each
//! overridden layer runs with. Configurations are persisted one per JSON file
//! and can be read from every historical layout of that file.
//!
//! # Format generations
//!
//! | version            | layout                                   |
//! |--------------------|------------------------------------------|
//! | missing, `< 2.1.0` | entry keyed by name, `layer_options` map |
//! | `2.1.x`            | `configuration` object, `layers` array   |
//! | `2.2.0` and later  | as 2.1.x with mandatory setting types    |
//!
//! Saving always writes the newest layout.

mod document;
mod format;
mod io;
mod legacy;
mod naming;
mod parameter;
mod reset;


pub use format::SchemaGeneration;
pub use legacy::PLACEHOLDER_NAME;
pub use naming::make_unique_name;
pub use parameter::{
    LayerState, NO_RANK, Parameter, find_parameter, find_parameter_mut, order_parameters,
};

use crate::builtin::BuiltinConfigurations;
use crate::paths::{PathKind, PathResolver};
use crate::platform::PlatformFlags;
use std::path::PathBuf;

/// Name given to configurations created from scratch.
pub const DEFAULT_NAME: &str = "New Configuration";

/// A named, persisted set of layer parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Configuration name, also the file stem it is saved under.
    pub key: String,
    pub description: String,
    pub platform_flags: PlatformFlags,
    /// Editor UI state, stored and written back untouched.
    pub setting_tree_state: String,
    /// Layer parameters in application order.
    pub parameters: Vec<Parameter>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            key: DEFAULT_NAME.to_string(),
            description: String::new(),
            platform_flags: PlatformFlags::ALL,
            setting_tree_state: String::new(),
            parameters: Vec::new(),
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any parameter that applies to this platform overrides discovery.
    pub fn has_override(&self) -> bool {
        self.parameters.iter().any(|p| {
            p.is_available_on_this_platform() && p.state != LayerState::ApplicationControlled
        })
    }

    pub fn is_available_on_this_platform(&self) -> bool {
        self.platform_flags.includes_current()
    }

    /// Whether a bundled configuration has this configuration's name.
    pub fn is_built_in<B: BuiltinConfigurations + ?Sized>(&self, builtins: &B) -> bool {
        builtins.find(&self.key).is_some()
    }

    /// Whether a file for this configuration exists in any storage root.
    pub fn has_saved_file<P: PathResolver + ?Sized>(&self, paths: &P) -> bool {
        self.saved_file_path(paths).is_some()
    }

    /// First existing file for this configuration, current root before legacy.
    pub fn saved_file_path<P: PathResolver + ?Sized>(&self, paths: &P) -> Option<PathBuf> {
        PathKind::SEARCH_ORDER
            .into_iter()
            .map(|kind| paths.full_path(kind, &self.key))
            .find(|path| path.is_file())
    }

    /// Copy this configuration under a name not used by `existing`.
    pub fn duplicate(&self, existing: &[Configuration]) -> Configuration {
        let names: Vec<&str> = existing.iter().map(|c| c.key.as_str()).collect();
        Configuration {
            key: make_unique_name(&names, &self.key),
            ..self.clone()
        }
    }
}
