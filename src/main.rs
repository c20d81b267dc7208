//! reqlint - a linter and editor for pip requirements manifests
//!
//! Reads requirements.txt-style files, checks that every line parses, that
//! no package is declared twice with conflicting constraints, and that every
//! constraint uses a recognized operator. Also lists, formats, diffs and
//! edits manifests while preserving comments and grouping.

mod cli;
mod commands;
mod error;
mod lint;
mod manifest;
mod utils;
mod version;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        // Our own errors carry hints; everything else goes through anyhow
        if let Some(lint_err) = err.downcast_ref::<error::ReqlintError>() {
            lint_err.display_with_hints();
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
