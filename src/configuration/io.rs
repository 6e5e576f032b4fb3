//! Loading and saving configuration files.

use super::Configuration;
use super::document;
use super::format::{SchemaGeneration, document_version};
use super::legacy;
use super::parameter::order_parameters;
use crate::error::{LayerConfError, Result};
use crate::layer::LayerRegistry;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

impl Configuration {
    /// Replace this configuration with the contents of the file at `path`.
    ///
    /// Any layout generation is accepted. Members the document omits take
    /// their [`Configuration::default`] values. Parameters are cleared before
    /// reading; on failure the configuration is left with no parameters and
    /// its other fields untouched. Parameters of layers found in
    /// `available_layers` start from the layer's default settings.
    ///
    /// A pre-2.1.0 file whose stored name is empty is deleted and the
    /// configuration is named [`super::PLACEHOLDER_NAME`].
    pub fn load<R, P>(&mut self, available_layers: &R, path: P) -> Result<()>
    where
        R: LayerRegistry + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        self.parameters.clear();

        let content = crate::fs::read_text(path)?;
        let root: Value = serde_json::from_str(&content).map_err(|e| {
            LayerConfError::ParseError(format!("'{}': {}", path.display(), e))
        })?;
        let Value::Object(root) = root else {
            return Err(LayerConfError::format(format!(
                "'{}': document root is not an object",
                path.display()
            )));
        };

        let version = document_version(&root)?;
        let generation = SchemaGeneration::from_version(version);
        debug!(path = %path.display(), %version, ?generation, "loading configuration");

        let mut parsed = Configuration::default();
        match generation {
            SchemaGeneration::Legacy => {
                legacy::parse(&mut parsed, available_layers, &root, version, path)?
            }
            SchemaGeneration::Layered | SchemaGeneration::Current => {
                document::parse(&mut parsed, available_layers, root, generation)?
            }
        }
        order_parameters(&mut parsed.parameters);

        *self = parsed;
        info!(
            name = %self.key,
            path = %path.display(),
            layers = self.parameters.len(),
            "loaded configuration"
        );
        Ok(())
    }

    /// Read a configuration file into a new configuration.
    pub fn from_file<R, P>(available_layers: &R, path: P) -> Result<Self>
    where
        R: LayerRegistry + ?Sized,
        P: AsRef<Path>,
    {
        let mut configuration = Configuration::new();
        configuration.load(available_layers, path)?;
        Ok(configuration)
    }

    /// Serialize to the current document layout.
    ///
    /// Application-controlled parameters carry no override and are omitted.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&document::build(self)).map_err(|e| {
            LayerConfError::FormatError(format!("failed to serialize configuration: {}", e))
        })
    }

    /// Atomically write the configuration to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut content = self.to_json()?;
        content.push('\n');
        crate::fs::atomic_write_file(path, &content)?;
        info!(name = %self.key, path = %path.display(), "saved configuration");
        Ok(())
    }
}
