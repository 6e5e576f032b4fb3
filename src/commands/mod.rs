//! Command implementations for layerconf.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command works against an [`AppContext`] built from
//! the application config.

mod duplicate;
mod list;
mod migrate;
mod reset;
mod show;
mod status;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;

/// Resolve the application config and run the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let ctx = AppContext::from_config(&config)?;
    dispatch(&ctx, cli.command)
}

/// Dispatch a command to its implementation.
pub fn dispatch(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::List => list::cmd_list(ctx),
        Command::Show(args) => show::cmd_show(ctx, args),
        Command::Migrate(args) => migrate::cmd_migrate(ctx, args),
        Command::Duplicate(args) => duplicate::cmd_duplicate(ctx, args),
        Command::Reset(args) => reset::cmd_reset(ctx, args),
        Command::Status(args) => status::cmd_status(ctx, args),
    }
}
