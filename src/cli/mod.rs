//! CLI argument parsing for layerconf.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerconf: inspect, migrate and reset layer configurations.
///
/// A configuration is a named set of layer overrides saved as one JSON file.
/// Files written by any earlier release are read and upgraded on save.
#[derive(Parser, Debug)]
#[command(name = "layerconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Application config file (default: ./layerconf.yaml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress at info level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for layerconf.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List saved and built-in configurations.
    ///
    /// Shows where each configuration comes from and whether it overrides
    /// layer discovery on this platform.
    List,

    /// Show the layers and settings of a configuration.
    Show(ShowArgs),

    /// Rewrite a configuration file in the current format.
    ///
    /// Reads any format generation and writes format 2.2.0, in place unless
    /// `--output` is given.
    Migrate(MigrateArgs),

    /// Save a copy of a configuration under a unique name.
    Duplicate(DuplicateArgs),

    /// Discard edits to a configuration.
    ///
    /// Restores the built-in or saved version, or clears every override when
    /// neither exists, then saves the result.
    Reset(ResetArgs),

    /// Report whether a configuration overrides layers on this platform.
    Status(StatusArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Configuration name or path to a configuration file.
    pub configuration: String,
}

/// Arguments for the `migrate` command.
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Configuration file to read.
    pub input: PathBuf,

    /// Where to write the migrated file (default: overwrite INPUT).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `duplicate` command.
#[derive(Parser, Debug)]
pub struct DuplicateArgs {
    /// Configuration name or path to a configuration file.
    pub configuration: String,

    /// Proposed name for the copy (default: the source name).
    #[arg(long = "as", value_name = "NAME")]
    pub new_name: Option<String>,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Configuration name.
    pub name: String,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Configuration name or path to a configuration file.
    pub configuration: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
