//! Implementation of the `layerconf reset` command.

use crate::cli::ResetArgs;
use crate::context::AppContext;
use crate::error::Result;

/// Execute the `layerconf reset` command.
///
/// Loads the configuration by name, resets it (built-in first, then the
/// saved file, then no overrides) and saves the result in the current
/// storage root.
pub fn cmd_reset(ctx: &AppContext, args: ResetArgs) -> Result<()> {
    let mut configuration = ctx.resolve_configuration(&args.name)?.configuration;
    configuration.reset(&ctx.layers, &ctx.builtins, &ctx.paths)?;

    let path = ctx.save_path(&configuration.key);
    configuration.save(&path)?;

    println!("Reset '{}': {}", configuration.key, path.display());
    Ok(())
}
