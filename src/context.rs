//! Environment resolution for layerconf commands.
//!
//! This module turns the application [`Config`] into the services every
//! command needs: the registered layers, the storage roots and the built-in
//! configurations. It also resolves a command-line `NAME|PATH` argument to a
//! loaded [`Configuration`].

use crate::builtin::{BuiltinConfigurations, DirectoryBuiltins};
use crate::config::Config;
use crate::configuration::Configuration;
use crate::error::{LayerConfError, Result};
use crate::layer::Layer;
use crate::paths::{PathKind, PathManager, PathResolver};
use crate::store;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a configuration was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Saved,
    Legacy,
    BuiltIn,
    File,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::Saved => "saved",
            Origin::Legacy => "legacy",
            Origin::BuiltIn => "built-in",
            Origin::File => "file",
        }
    }
}

/// A configuration together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LocatedConfiguration {
    pub configuration: Configuration,
    pub path: PathBuf,
    pub origin: Origin,
}

/// Resolved services for layerconf operations.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub layers: Vec<Layer>,
    pub paths: PathManager,
    pub builtins: DirectoryBuiltins,
}

impl AppContext {
    /// Build the context for `config`, reading every layer manifest.
    pub fn from_config(config: &Config) -> Result<Self> {
        let layers = config.load_layers()?;
        debug!(count = layers.len(), dir = %config.layers_dir, "registered layers");

        Ok(Self {
            layers,
            paths: config.paths(),
            builtins: config.builtins(),
        })
    }

    /// Path a configuration named `name` is saved to.
    pub fn save_path(&self, name: &str) -> PathBuf {
        self.paths.full_path(PathKind::Configuration, name)
    }

    /// Load the configuration named by `name_or_path`.
    ///
    /// An existing file path is read directly. Otherwise the argument is a
    /// configuration name, looked up in the current storage root, then the
    /// legacy root, then the built-ins.
    pub fn resolve_configuration(&self, name_or_path: &str) -> Result<LocatedConfiguration> {
        let candidate = Path::new(name_or_path);
        if candidate.is_file() {
            return self.load_located(candidate.to_path_buf(), Origin::File);
        }

        for (kind, origin) in [
            (PathKind::Configuration, Origin::Saved),
            (PathKind::ConfigurationLegacy, Origin::Legacy),
        ] {
            let path = self.paths.full_path(kind, name_or_path);
            if path.is_file() {
                return self.load_located(path, origin);
            }
        }

        if let Some(builtin) = self.builtins.find(name_or_path) {
            return self.load_located(builtin.path, Origin::BuiltIn);
        }

        Err(LayerConfError::UserError(format!(
            "configuration '{}' not found.\n\n\
             Searched: {}, {}, {}\n\n\
             Use `layerconf list` to see all configurations.",
            name_or_path,
            self.paths.dir(PathKind::Configuration).display(),
            self.paths.dir(PathKind::ConfigurationLegacy).display(),
            self.builtins.dir().display()
        )))
    }

    /// Every configuration known by name: saved ones first, then legacy ones
    /// and built-ins whose names are not already taken.
    pub fn all_configurations(&self) -> Result<Vec<LocatedConfiguration>> {
        let mut all: Vec<LocatedConfiguration> = Vec::new();

        for (kind, origin) in [
            (PathKind::Configuration, Origin::Saved),
            (PathKind::ConfigurationLegacy, Origin::Legacy),
        ] {
            for stored in store::load_all(self.paths.dir(kind), &self.layers)? {
                if all.iter().any(|c| c.configuration.key == stored.configuration.key) {
                    continue;
                }
                all.push(LocatedConfiguration {
                    configuration: stored.configuration,
                    path: stored.path,
                    origin,
                });
            }
        }

        for builtin in self.builtins.list() {
            if all.iter().any(|c| c.configuration.key == builtin.name) {
                continue;
            }
            match Configuration::from_file(&self.layers, &builtin.path) {
                Ok(configuration) => all.push(LocatedConfiguration {
                    configuration,
                    path: builtin.path,
                    origin: Origin::BuiltIn,
                }),
                Err(e) => {
                    warn!(path = %builtin.path.display(), error = %e, "skipping built-in configuration")
                }
            }
        }

        all.sort_by(|a, b| a.configuration.key.cmp(&b.configuration.key));
        Ok(all)
    }

    fn load_located(&self, path: PathBuf, origin: Origin) -> Result<LocatedConfiguration> {
        let configuration = Configuration::from_file(&self.layers, &path)?;
        Ok(LocatedConfiguration {
            configuration,
            path,
            origin,
        })
    }
}
