//! Fmt command - normalize a requirements manifest
//!
//! Rewrites requirement lines in canonical form (no stray spaces, canonical
//! specifier rendering) and sorts each comment-delimited group of
//! requirements alphabetically. Comments, blank lines, options and direct
//! references stay exactly where they are; inline comments travel with
//! their requirement.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::manifest::parser::{strip_inline_comment, LineKind};
use crate::manifest::requirement::Requirement;
use crate::manifest::{Entry, Manifest};
use crate::utils::terminal::{print_info, print_success};

/// Normalize and sort a requirements manifest
#[derive(Args, Debug)]
pub struct FmtCommand {
    /// Manifest file to format
    #[arg(default_value = "requirements.txt")]
    pub file: PathBuf,

    /// Report whether the file is formatted instead of rewriting it
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    /// Execute the fmt command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let manifest = Manifest::load(&self.file)?;

        let broken: Vec<usize> = manifest
            .entries()
            .iter()
            .filter(|e| matches!(e.kind, LineKind::Invalid(_)))
            .map(|e| e.lineno)
            .collect();
        if !broken.is_empty() {
            bail!(
                "Cannot format {}: line(s) {} failed to parse. Run 'reqlint check {}' first.",
                self.file.display(),
                broken
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                self.file.display()
            );
        }

        let formatted = format_manifest(&manifest);
        let original = manifest.render();

        if formatted == original {
            print_info(&format!("{} is already formatted", self.file.display()));
            return Ok(());
        }

        if self.check {
            let differing = original
                .lines()
                .zip(formatted.lines())
                .filter(|(a, b)| a != b)
                .count()
                + original.lines().count().abs_diff(formatted.lines().count());
            print_info(&format!(
                "{} needs formatting ({} line(s) would change)",
                self.file.display(),
                differing
            ));
            std::process::exit(1);
        }

        std::fs::write(&self.file, formatted)?;
        print_success(&format!("formatted {}", self.file.display()));
        Ok(())
    }
}

/// Inline `# ...` comment carried by an entry's raw line, if any
fn inline_comment(entry: &Entry) -> Option<String> {
    let logical = entry.raw.replace("\\\n", " ");
    let trimmed = logical.trim();
    let kept = strip_inline_comment(trimmed);
    let comment = trimmed[kept.len()..].trim();
    (!comment.is_empty()).then(|| comment.to_string())
}

/// Produce the canonical rendering: sorted groups, normalized lines
pub fn format_manifest(manifest: &Manifest) -> String {
    let ending = manifest.line_ending();
    let entries = manifest.entries();
    let mut lines: Vec<String> = Vec::with_capacity(entries.len());

    let mut i = 0;
    while i < entries.len() {
        if let LineKind::Requirement(_) = entries[i].kind {
            // Collect the whole run of consecutive requirement entries,
            // each with the inline comment its raw line carried
            let mut group: Vec<(&Requirement, Option<String>)> = Vec::new();
            while i < entries.len() {
                match &entries[i].kind {
                    LineKind::Requirement(req) => {
                        group.push((req, inline_comment(&entries[i])));
                        i += 1;
                    }
                    _ => break,
                }
            }
            group.sort_by(|a, b| a.0.normalized_name().cmp(&b.0.normalized_name()));
            lines.extend(group.iter().map(|(req, comment)| match comment {
                Some(c) => format!("{}  {}", req, c),
                None => req.to_string(),
            }));
        } else {
            lines.push(entries[i].raw.replace('\n', ending));
            i += 1;
        }
    }

    let mut out = lines.join(ending);
    if !out.is_empty() {
        out.push_str(ending);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_within_groups_only() {
        let manifest = Manifest::parse(
            "# Application\nflask>=2\ndjango ~= 4.2\n\n# AWS\nboto3==1.2\nbotocore==1.1\n",
        );
        let formatted = format_manifest(&manifest);
        assert_eq!(
            formatted,
            "# Application\ndjango~=4.2\nflask>=2\n\n# AWS\nboto3==1.2\nbotocore==1.1\n"
        );
    }

    #[test]
    fn test_keeps_inline_comments() {
        let manifest = Manifest::parse("flask>=2\ndjango ~= 4.2  # LTS until 2026\n");
        assert_eq!(
            format_manifest(&manifest),
            "django~=4.2  # LTS until 2026\nflask>=2\n"
        );
    }

    #[test]
    fn test_normalizes_spacing() {
        let manifest = Manifest::parse("requests >= 2.0 , < 3.0\n");
        assert_eq!(format_manifest(&manifest), "requests>=2.0,<3.0\n");
    }

    #[test]
    fn test_formatted_input_is_untouched() {
        let text = "# Application\ndjango~=4.2\nflask>=2\n";
        let manifest = Manifest::parse(text);
        assert_eq!(format_manifest(&manifest), text);
    }

    #[test]
    fn test_adds_trailing_newline() {
        let manifest = Manifest::parse("b==1\na==2");
        assert_eq!(format_manifest(&manifest), "a==2\nb==1\n");
    }
}
