//! Pin command - pin a requirement to an exact version
//!
//! Usage:
//!   reqlint pin requirements.txt django 4.2.16
//!
//! Rewrites the entry as `name==version`, keeping extras and markers. The
//! pin is validated against the entry's current constraint so a typo like
//! pinning django to 3.0 under `~=4.2` is caught before the file changes.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::manifest::requirement::Requirement;
use crate::manifest::Manifest;
use crate::utils::terminal::{print_success, print_warning};
use crate::version::{SpecifierSet, Version};

/// Pin a requirement to an exact version
#[derive(Args, Debug)]
pub struct PinCommand {
    /// Manifest file to edit
    pub file: PathBuf,

    /// Package name to pin
    pub name: String,

    /// Version to pin to, e.g. "4.2.16"
    // The id must not clash with the propagated --version flag
    #[arg(id = "pin_version", value_name = "VERSION")]
    pub version: String,

    /// Pin even if the version violates the current constraint
    #[arg(long)]
    pub force: bool,
}

impl PinCommand {
    /// Execute the pin command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let version = Version::parse(&self.version)?;
        let mut manifest = Manifest::load(&self.file)?;

        let existing = match manifest.find(&self.name) {
            Some(req) => req.clone(),
            None => {
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
        };
        if !existing.specifiers.is_empty()
            && !version.matches(&existing.specifiers)
            && !self.force
        {
            bail!(
                "{} does not satisfy the current constraint '{}' for '{}'\n\
                 Use --force to pin anyway.",
                version,
                existing.specifiers,
                existing.name
            );
        }
        if !version.is_stable() {
            print_warning(&format!("'{}' is a pre-release version", version));
        }

        // Keep the written name, extras and marker of the existing entry
        let req = Requirement {
            specifiers: SpecifierSet::parse(&format!("=={}", version))?,
            ..existing
        };
        let rendered = req.to_string();
        manifest.upsert(req);
        manifest.save()?;

        print_success(&format!(
            "pinned '{}' in {}",
            rendered,
            self.file.display()
        ));
        Ok(())
    }
}
