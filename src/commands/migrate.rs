//! Implementation of the `layerconf migrate` command.

use crate::cli::MigrateArgs;
use crate::configuration::Configuration;
use crate::context::AppContext;
use crate::error::Result;
use crate::version::Version;

/// Execute the `layerconf migrate` command.
///
/// Loads the input in whatever format generation it was written in and saves
/// it in the current format, in place unless an output path is given.
pub fn cmd_migrate(ctx: &AppContext, args: MigrateArgs) -> Result<()> {
    let configuration = Configuration::from_file(&ctx.layers, &args.input)?;
    let output = args.output.unwrap_or(args.input);
    configuration.save(&output)?;

    println!(
        "Migrated '{}' to format {}: {}",
        configuration.key,
        Version::CURRENT,
        output.display()
    );
    Ok(())
}
