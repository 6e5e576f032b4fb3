//! Implementation of the `layerconf duplicate` command.

use crate::cli::DuplicateArgs;
use crate::configuration::Configuration;
use crate::context::AppContext;
use crate::error::Result;

/// Execute the `layerconf duplicate` command.
///
/// The copy is named after `--as` (or the source) with a `" (N)"` suffix
/// when that name is taken, and saved in the current storage root.
pub fn cmd_duplicate(ctx: &AppContext, args: DuplicateArgs) -> Result<()> {
    let mut source = ctx.resolve_configuration(&args.configuration)?.configuration;
    if let Some(name) = args.new_name {
        source.key = name;
    }

    let existing: Vec<Configuration> = ctx
        .all_configurations()?
        .into_iter()
        .map(|located| located.configuration)
        .collect();
    let copy = source.duplicate(&existing);

    let path = ctx.save_path(&copy.key);
    copy.save(&path)?;

    println!("Created '{}': {}", copy.key, path.display());
    Ok(())
}
