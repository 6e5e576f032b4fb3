//! Implementation of the `layerconf show` command.
//!
//! Displays the layers of a configuration in application order together
//! with their states, ranks and settings.

use crate::cli::ShowArgs;
use crate::context::{AppContext, LocatedConfiguration};
use crate::error::Result;

/// Execute the `layerconf show` command.
pub fn cmd_show(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let located = ctx.resolve_configuration(&args.configuration)?;
    print!("{}", render_show(&located));
    Ok(())
}

pub(super) fn render_show(located: &LocatedConfiguration) -> String {
    let configuration = &located.configuration;
    let rule = "=".repeat(80);
    let mut out = String::new();

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!(
        "{} [{}]\n",
        configuration.key,
        located.origin.label()
    ));
    out.push_str(&format!("{}\n\n", rule));

    if !configuration.description.is_empty() {
        out.push_str(&format!("Description: {}\n", configuration.description));
    }
    out.push_str(&format!("Platforms:   {}\n", configuration.platform_flags));
    out.push_str(&format!("File:        {}\n\n", located.path.display()));

    if configuration.parameters.is_empty() {
        out.push_str("Layers: (none)\n");
        return out;
    }

    out.push_str("Layers:\n");
    for parameter in &configuration.parameters {
        let rank = parameter
            .overridden_rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());
        let platform_note = if parameter.is_available_on_this_platform() {
            String::new()
        } else {
            format!(" (only {})", parameter.platform_flags)
        };
        out.push_str(&format!(
            "  {:>3}  {:21} {}{}\n",
            rank,
            parameter.state.token(),
            parameter.key,
            platform_note
        ));

        for setting in parameter.settings.iter() {
            out.push_str(&format!(
                "         {} ({}) = {}\n",
                setting.key(),
                setting.kind(),
                setting.value()
            ));
        }
    }

    out
}
