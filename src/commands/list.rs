//! Implementation of the `layerconf list` command.

use crate::context::{AppContext, LocatedConfiguration};
use crate::error::Result;

/// Execute the `layerconf list` command.
pub fn cmd_list(ctx: &AppContext) -> Result<()> {
    let configurations = ctx.all_configurations()?;
    print!("{}", render_list(&configurations));
    Ok(())
}

pub(super) fn render_list(configurations: &[LocatedConfiguration]) -> String {
    let mut out = String::new();
    out.push_str("Configurations\n");
    out.push_str("==============\n\n");

    if configurations.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }

    let width = configurations
        .iter()
        .map(|c| c.configuration.key.chars().count())
        .max()
        .unwrap_or(0);

    for located in configurations {
        let configuration = &located.configuration;
        let overrides = if configuration.has_override() {
            "overrides layers"
        } else {
            "no overrides"
        };
        let unavailable = if configuration.is_available_on_this_platform() {
            ""
        } else {
            " (not available on this platform)"
        };
        out.push_str(&format!(
            "  {:width$}  {:10} {}{}\n",
            configuration.key,
            format!("[{}]", located.origin.label()),
            overrides,
            unavailable,
            width = width
        ));
    }

    out.push_str(&format!("\n{} configuration(s)\n", configurations.len()));
    out
}
