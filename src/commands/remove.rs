//! Remove command - delete a requirement from a manifest
//!
//! Usage:
//!   reqlint remove requirements.txt requests
//!
//! Lookup is by normalized name, so "Django", "django" and "DJANGO" all
//! address the same entry.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::manifest::Manifest;
use crate::utils::terminal::print_success;

/// Remove a requirement from a manifest
#[derive(Args, Debug)]
pub struct RemoveCommand {
    /// Manifest file to edit
    pub file: PathBuf,

    /// Package name to remove
    pub name: String,
}

impl RemoveCommand {
    /// Execute the remove command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let mut manifest = Manifest::load(&self.file)?;

        if !manifest.remove(&self.name) {
            let known: Vec<String> = manifest
                .requirements()
                .map(|r| r.normalized_name())
                .collect();
            bail!(
                "'{}' not found in {}\nDeclared packages: {}",
                self.name,
                self.file.display(),
                if known.is_empty() {
                    "(none)".to_string()
                } else {
                    known.join(", ")
                }
            );
        }

        manifest.save()?;
        print_success(&format!(
            "removed '{}' from {}",
            self.name,
            self.file.display()
        ));
        Ok(())
    }
}
