//! Implementation of the `layerconf status` command.

use crate::cli::StatusArgs;
use crate::configuration::{Configuration, LayerState};
use crate::context::AppContext;
use crate::error::Result;
use crate::platform::Platform;

/// Execute the `layerconf status` command.
pub fn cmd_status(ctx: &AppContext, args: StatusArgs) -> Result<()> {
    let located = ctx.resolve_configuration(&args.configuration)?;
    print!("{}", render_status(&located.configuration));
    Ok(())
}

pub(super) fn render_status(configuration: &Configuration) -> String {
    let platform = Platform::current().token();
    let mut out = format!("{} on {}:\n", configuration.key, platform);

    if !configuration.is_available_on_this_platform() {
        out.push_str(&format!(
            "  not available (platforms: {})\n",
            configuration.platform_flags
        ));
        return out;
    }

    let active = configuration
        .parameters
        .iter()
        .filter(|p| p.is_available_on_this_platform());
    let (mut overridden, mut excluded) = (0, 0);
    for parameter in active {
        match parameter.state {
            LayerState::Overridden => overridden += 1,
            LayerState::Excluded => excluded += 1,
            LayerState::ApplicationControlled => {}
        }
    }

    if configuration.has_override() {
        out.push_str(&format!(
            "  overrides layer discovery: {} forced on, {} forced off\n",
            overridden, excluded
        ));
    } else {
        out.push_str("  no overrides, layers are application-controlled\n");
    }
    out
}
