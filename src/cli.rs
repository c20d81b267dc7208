//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    add::AddCommand, check::CheckCommand, diff::DiffCommand, fmt::FmtCommand, list::ListCommand,
    pin::PinCommand, remove::RemoveCommand,
};

/// reqlint - pip requirements manifest linter and editor
///
/// Parses, validates, formats and edits requirements.txt-style manifests
/// without ever touching a package index.
#[derive(Parser, Debug)]
#[command(name = "reqlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a manifest (syntax, duplicates, conflicting constraints)
    Check(CheckCommand),

    /// List the parsed requirements of a manifest
    List(ListCommand),

    /// Add or update a requirement
    Add(AddCommand),

    /// Remove a requirement
    Remove(RemoveCommand),

    /// Pin a requirement to an exact version
    Pin(PinCommand),

    /// Normalize and sort a manifest
    Fmt(FmtCommand),

    /// Compare two manifests
    Diff(DiffCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Execute the subcommand
        match self.command {
            Commands::Check(cmd) => cmd.execute(self.verbose),
            Commands::List(cmd) => cmd.execute(self.verbose),
            Commands::Add(cmd) => cmd.execute(self.verbose),
            Commands::Remove(cmd) => cmd.execute(self.verbose),
            Commands::Pin(cmd) => cmd.execute(self.verbose),
            Commands::Fmt(cmd) => cmd.execute(self.verbose),
            Commands::Diff(cmd) => cmd.execute(self.verbose),
        }
    }
}
