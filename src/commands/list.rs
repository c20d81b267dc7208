//! List command - print the parsed requirements of a manifest
//!
//! Output formats:
//!   table  aligned name / constraint / marker columns (default)
//!   json   machine-readable array
//!   names  one normalized name per line

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::manifest::requirement::Requirement;
use crate::manifest::Manifest;
use crate::utils::terminal::print_warning;

/// List the requirements in a manifest
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Manifest file to read
    #[arg(default_value = "requirements.txt")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Names,
}

/// One requirement flattened for output
#[derive(Serialize)]
pub struct RequirementRow {
    pub name: String,
    pub normalized: String,
    pub extras: Vec<String>,
    pub constraint: String,
    pub marker: Option<String>,
    pub line: usize,
}

impl From<&Requirement> for RequirementRow {
    fn from(req: &Requirement) -> Self {
        RequirementRow {
            name: req.name.clone(),
            normalized: req.normalized_name(),
            extras: req.extras.clone(),
            constraint: req.specifiers.to_string(),
            marker: req.marker.clone(),
            line: req.line,
        }
    }
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let manifest = Manifest::load(&self.file)?;

        let broken = manifest
            .entries()
            .iter()
            .filter(|e| matches!(e.kind, crate::manifest::parser::LineKind::Invalid(_)))
            .count();
        if broken > 0 {
            print_warning(&format!(
                "{} line(s) failed to parse and are not listed (run 'reqlint check')",
                broken
            ));
        }

        let rows: Vec<RequirementRow> = manifest.requirements().map(RequirementRow::from).collect();

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            OutputFormat::Names => {
                for row in &rows {
                    println!("{}", row.normalized);
                }
            }
            OutputFormat::Table => {
                print_table(&rows);
            }
        }
        Ok(())
    }
}

fn print_table(rows: &[RequirementRow]) {
    if rows.is_empty() {
        println!("(no requirements)");
        return;
    }

    let name_of = |row: &RequirementRow| -> String {
        if row.extras.is_empty() {
            row.name.clone()
        } else {
            format!("{}[{}]", row.name, row.extras.join(","))
        }
    };
    let name_width = rows.iter().map(|r| name_of(r).len()).max().unwrap_or(0);
    let constraint_width = rows
        .iter()
        .map(|r| r.constraint.len().max(1))
        .max()
        .unwrap_or(1);

    for row in rows {
        let constraint = if row.constraint.is_empty() {
            "*"
        } else {
            row.constraint.as_str()
        };
        let marker = match &row.marker {
            Some(m) => format!("  ; {}", m),
            None => String::new(),
        };
        println!(
            "{:<name_width$}  {:<constraint_width$}{}",
            name_of(row),
            constraint,
            marker
        );
    }
}
