//! Diff command - compare two requirements manifests
//!
//! Reports packages added, removed, and changed (constraint, extras or
//! marker) between an old and a new manifest. Comparison is by normalized
//! name, so a case-only rename shows up as changed, not added+removed.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;

use crate::commands::list::RequirementRow;
use crate::manifest::requirement::Requirement;
use crate::manifest::Manifest;

/// Compare two requirements manifests
#[derive(Args, Debug)]
pub struct DiffCommand {
    /// Old manifest
    pub old: PathBuf,

    /// New manifest
    pub new: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: DiffFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DiffFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct ChangedRow {
    name: String,
    old: String,
    new: String,
}

#[derive(Serialize)]
struct DiffReport {
    added: Vec<RequirementRow>,
    removed: Vec<RequirementRow>,
    changed: Vec<ChangedRow>,
}

impl DiffCommand {
    /// Execute the diff command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let old = Manifest::load(&self.old)?;
        let new = Manifest::load(&self.new)?;
        let report = build_report(&old, &new);

        match self.format {
            DiffFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            DiffFormat::Table => print_report(&report),
        }
        Ok(())
    }
}

fn by_name(manifest: &Manifest) -> BTreeMap<String, &Requirement> {
    manifest
        .requirements()
        .map(|req| (req.normalized_name(), req))
        .collect()
}

fn build_report(old: &Manifest, new: &Manifest) -> DiffReport {
    let old_map = by_name(old);
    let new_map = by_name(new);

    let mut report = DiffReport {
        added: Vec::new(),
        removed: Vec::new(),
        changed: Vec::new(),
    };

    for (name, req) in &new_map {
        match old_map.get(name) {
            None => report.added.push(RequirementRow::from(*req)),
            Some(old_req) if old_req.to_string() != req.to_string() => {
                report.changed.push(ChangedRow {
                    name: name.clone(),
                    old: old_req.to_string(),
                    new: req.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    for (name, req) in &old_map {
        if !new_map.contains_key(name) {
            report.removed.push(RequirementRow::from(*req));
        }
    }
    report
}

fn print_report(report: &DiffReport) {
    if report.added.is_empty() && report.removed.is_empty() && report.changed.is_empty() {
        println!("manifests declare the same requirements");
        return;
    }

    for row in &report.added {
        let rendered = if row.constraint.is_empty() {
            row.name.clone()
        } else {
            format!("{}{}", row.name, row.constraint)
        };
        println!("{} {}", style("+").green().bold(), rendered);
    }
    for row in &report.removed {
        println!("{} {}", style("-").red().bold(), row.name);
    }
    for row in &report.changed {
        println!(
            "{} {}: {} -> {}",
            style("~").yellow().bold(),
            row.name,
            row.old,
            row.new
        );
    }
    println!(
        "\n{} added, {} removed, {} changed",
        report.added.len(),
        report.removed.len(),
        report.changed.len()
    );
}
