//! Add command - insert or update a requirement in a manifest
//!
//! Usage:
//!   reqlint add requirements.txt "requests>=2.31"
//!   reqlint add requirements.txt "Django~=4.2"
//!   reqlint add requirements.txt "celery[redis]>=5.3,<6"
//!
//! An existing entry for the same package (normalized name) is replaced in
//! place; a new package is appended at the end. All other lines, comments
//! and grouping are preserved byte-for-byte.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::error::{hints, ReqlintError};
use crate::manifest::requirement::Requirement;
use crate::manifest::Manifest;
use crate::utils::terminal::print_success;

/// Add or update a requirement in a manifest
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Manifest file to edit
    pub file: PathBuf,

    /// Requirement to add, e.g. "requests>=2.31" or "celery[redis]>=5.3,<6"
    pub requirement: String,
}

impl AddCommand {
    /// Execute the add command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let req = Requirement::parse(&self.requirement).map_err(|e| {
            ReqlintError::requirement_error_with_hint(
                self.requirement.clone(),
                format!("{:#}", e),
                Some(e),
                hints::invalid_requirement(),
            )
        })?;

        let mut manifest = Manifest::load(&self.file)?;
        let replaced_constraint = manifest.find(&req.name).map(|old| old.specifiers.to_string());
        let rendered = req.to_string();
        let replaced = manifest.upsert(req);
        manifest.save()?;

        if replaced {
            if verbose {
                if let Some(old) = replaced_constraint {
                    let old = if old.is_empty() {
                        "unconstrained"
                    } else {
                        old.as_str()
                    };
                    println!("  previous constraint: {}", old);
                }
            }
            print_success(&format!(
                "updated '{}' in {}",
                rendered,
                self.file.display()
            ));
        } else {
            print_success(&format!(
                "added '{}' to {}",
                rendered,
                self.file.display()
            ));
        }
        Ok(())
    }
}
