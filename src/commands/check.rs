//! Check command - validate a requirements manifest
//!
//! Parses the manifest (following `-r` includes unless told not to), runs
//! the lint rules and prints a grouped report. Exits nonzero when any
//! error-severity finding exists.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::lint::{lint_all, Diagnostic, Severity};
use crate::manifest::Manifest;

/// Validate a requirements manifest
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Manifest file to check
    #[arg(default_value = "requirements.txt")]
    pub file: PathBuf,

    /// Enable pedantic warnings (unpinned entries, uncapped ranges)
    #[arg(long)]
    pub strict: bool,

    /// Do not follow '-r' includes
    #[arg(long)]
    pub no_follow: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, verbose: bool) -> Result<()> {
        println!("🔍 Checking {}...\n", self.file.display());

        let manifests = if self.no_follow {
            vec![Manifest::load(&self.file)?]
        } else {
            Manifest::load_with_includes(&self.file)?
        };

        let diagnostics = lint_all(&manifests, self.strict);
        let reporter = CheckReporter::new(&manifests, diagnostics, verbose);
        reporter.print_report();
        reporter.print_summary();

        if reporter.error_count() > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Collects and prints lint findings grouped by file
struct CheckReporter {
    file_count: usize,
    requirement_count: usize,
    diagnostics: Vec<Diagnostic>,
    verbose: bool,
}

impl CheckReporter {
    fn new(manifests: &[Manifest], diagnostics: Vec<Diagnostic>, verbose: bool) -> Self {
        Self {
            file_count: manifests.len(),
            requirement_count: manifests.iter().map(|m| m.requirements().count()).sum(),
            diagnostics,
            verbose,
        }
    }

    fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    fn print_report(&self) {
        for diag in &self.diagnostics {
            let location = match &diag.file {
                Some(path) => format!("{}:{}", path.display(), diag.line),
                None => format!("line {}", diag.line),
            };
            let label = match diag.severity {
                Severity::Error => style(format!("error[{}]", diag.code)).red().bold(),
                Severity::Warning => style(format!("warning[{}]", diag.code)).yellow().bold(),
            };
            println!("{}: {}: {}", label, location, diag.message);
            if self.verbose {
                if let Some(ref hint) = diag.hint {
                    for line in hint.lines() {
                        println!("  {} {}", style("hint:").cyan(), line);
                    }
                }
            }
        }
        if !self.diagnostics.is_empty() {
            println!();
        }
    }

    fn print_summary(&self) {
        let files = if self.file_count == 1 {
            "1 file".to_string()
        } else {
            format!("{} files", self.file_count)
        };
        println!(
            "Checked {} requirements across {}: {} error(s), {} warning(s)",
            self.requirement_count,
            files,
            self.error_count(),
            self.warning_count()
        );
        if self.diagnostics.is_empty() {
            println!("{} manifest is clean", style("✓").green().bold());
        }
    }
}
