//! Restoring a configuration to its baseline.

use super::Configuration;
use super::parameter::{LayerState, order_parameters};
use crate::builtin::BuiltinConfigurations;
use crate::error::{LayerConfError, Result};
use crate::layer::LayerRegistry;
use crate::paths::PathResolver;
use crate::settings::collect_default_setting_data;
use tracing::info;

impl Configuration {
    /// Discard in-memory edits.
    ///
    /// The first available baseline wins:
    /// 1. the built-in configuration of the same name,
    /// 2. the saved file in the current, then the legacy storage root,
    /// 3. no overrides at all, with every layer back on its default settings.
    ///
    /// In the last case every parameter's layer must be registered in
    /// `available_layers`; otherwise nothing is changed and
    /// [`LayerConfError::LayerNotRegistered`] is returned.
    pub fn reset<R, B, P>(&mut self, available_layers: &R, builtins: &B, paths: &P) -> Result<()>
    where
        R: LayerRegistry + ?Sized,
        B: BuiltinConfigurations + ?Sized,
        P: PathResolver + ?Sized,
    {
        if let Some(builtin) = builtins.find(&self.key) {
            info!(name = %self.key, path = %builtin.path.display(), "resetting from built-in");
            self.load(available_layers, &builtin.path)?;
        } else if let Some(path) = self.saved_file_path(paths) {
            info!(name = %self.key, path = %path.display(), "resetting from saved file");
            self.load(available_layers, &path)?;
        } else {
            info!(name = %self.key, "resetting to application-controlled layers");
            self.clear_overrides(available_layers)?;
        }

        order_parameters(&mut self.parameters);
        Ok(())
    }

    fn clear_overrides<R: LayerRegistry + ?Sized>(&mut self, available_layers: &R) -> Result<()> {
        let defaults = self
            .parameters
            .iter()
            .map(|p| {
                available_layers
                    .find_layer(&p.key)
                    .map(|layer| collect_default_setting_data(&layer.settings))
                    .ok_or_else(|| LayerConfError::LayerNotRegistered(p.key.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (parameter, settings) in self.parameters.iter_mut().zip(defaults) {
            parameter.state = LayerState::ApplicationControlled;
            parameter.overridden_rank = None;
            parameter.settings = settings;
        }
        Ok(())
    }
}
