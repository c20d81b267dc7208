//! Requirements manifest model
//!
//! A `Manifest` keeps every physical line it was parsed from, so edits and
//! formatting write back untouched lines byte-for-byte. Logical lines are
//! classified by `parser::classify`; `-r` includes can be followed
//! recursively with cycle detection.

pub mod parser;
pub mod requirement;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{hints, ReqlintError};
use parser::LineKind;
use requirement::{normalize_name, Requirement};

/// One logical line: the raw source text plus its parsed classification
#[derive(Debug, Clone)]
pub struct Entry {
    /// Original text, with continuation line breaks kept as '\n'
    pub raw: String,
    /// 1-based line number of the first physical line
    pub lineno: usize,
    pub kind: LineKind,
}

/// A parsed requirements manifest that round-trips its source text
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: Option<PathBuf>,
    entries: Vec<Entry>,
    crlf: bool,
    trailing_newline: bool,
}

impl Manifest {
    /// Parse manifest text; broken lines become `LineKind::Invalid` entries
    pub fn parse(text: &str) -> Self {
        let crlf = text.contains("\r\n");
        let trailing_newline = text.ends_with('\n') || text.is_empty();

        let physical: Vec<&str> = text.lines().collect();
        let mut entries = Vec::new();
        let mut i = 0;
        while i < physical.len() {
            let start = i;
            let mut raw = physical[i].to_string();
            // Backslash continuation joins the next physical line
            while raw.ends_with('\\') && i + 1 < physical.len() {
                i += 1;
                raw.push('\n');
                raw.push_str(physical[i]);
            }
            i += 1;

            let logical = raw.replace("\\\n", " ");
            let kind = parser::classify(&logical, start + 1);
            entries.push(Entry {
                raw,
                lineno: start + 1,
                kind,
            });
        }

        Manifest {
            path: None,
            entries,
            crlf,
            trailing_newline,
        }
    }

    /// Load a single manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ReqlintError::manifest_error_with_hint(
                format!("Cannot read '{}': {}", path.display(), e),
                hints::manifest_not_found(),
            )
        })?;
        let mut manifest = Self::parse(&text);
        manifest.path = Some(path.to_path_buf());
        Ok(manifest)
    }

    /// Load a manifest and everything it includes via `-r`, depth-first.
    ///
    /// A file included from two places loads once; a cycle is an error.
    pub fn load_with_includes(path: &Path) -> Result<Vec<Self>> {
        let mut seen = HashSet::new();
        let mut stack = Vec::new();
        let mut out = Vec::new();
        Self::load_recursive(path, &mut seen, &mut stack, &mut out)?;
        Ok(out)
    }

    fn load_recursive(
        path: &Path,
        seen: &mut HashSet<PathBuf>,
        stack: &mut Vec<PathBuf>,
        out: &mut Vec<Self>,
    ) -> Result<()> {
        let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if stack.contains(&canonical) {
            let chain: Vec<String> = stack
                .iter()
                .chain(std::iter::once(&canonical))
                .map(|p| p.display().to_string())
                .collect();
            return Err(ReqlintError::manifest_error_with_hint(
                format!("Include cycle: {}", chain.join(" -> ")),
                hints::include_cycle(),
            )
            .into());
        }
        if !seen.insert(canonical.clone()) {
            return Ok(());
        }

        let manifest = Self::load(path)?;
        let includes: Vec<String> = manifest
            .entries
            .iter()
            .filter_map(|e| match &e.kind {
                LineKind::Include(target) => Some(target.clone()),
                _ => None,
            })
            .collect();
        out.push(manifest);

        stack.push(canonical);
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for include in includes {
            Self::load_recursive(&base.join(&include), seen, stack, out)
                .with_context(|| format!("While following '-r {}' from '{}'", include, path.display()))?;
        }
        stack.pop();
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All successfully parsed requirement entries, in file order
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter().filter_map(|e| match &e.kind {
            LineKind::Requirement(req) => Some(req),
            _ => None,
        })
    }

    /// Find a requirement by normalized name
    pub fn find(&self, name: &str) -> Option<&Requirement> {
        let wanted = normalize_name(name);
        self.requirements()
            .find(|req| req.normalized_name() == wanted)
    }

    /// Replace the entry with the same normalized name, or append at the end.
    /// Returns true when an existing entry was replaced.
    pub fn upsert(&mut self, req: Requirement) -> bool {
        let wanted = req.normalized_name();
        let raw = req.to_string();
        let pos = self
            .entries
            .iter()
            .position(|e| entry_name(e).as_deref() == Some(wanted.as_str()));
        match pos {
            Some(idx) => {
                let lineno = self.entries[idx].lineno;
                self.entries[idx] = Entry {
                    raw,
                    lineno,
                    kind: LineKind::Requirement(Requirement { line: lineno, ..req }),
                };
                true
            }
            None => {
                // Continuations make an entry span several physical lines
                let lineno = self
                    .entries
                    .last()
                    .map_or(1, |e| e.lineno + e.raw.lines().count().max(1));
                self.entries.push(Entry {
                    raw,
                    lineno,
                    kind: LineKind::Requirement(Requirement { line: lineno, ..req }),
                });
                false
            }
        }
    }

    /// Remove all entries with the given normalized name; true if any went away
    pub fn remove(&mut self, name: &str) -> bool {
        let wanted = normalize_name(name);
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry_name(entry).as_deref() != Some(wanted.as_str()));
        self.entries.len() != before
    }

    /// Dominant line ending of the source text
    pub fn line_ending(&self) -> &'static str {
        if self.crlf {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Render back to text, preserving untouched lines and the source's
    /// dominant line ending
    pub fn render(&self) -> String {
        let ending = self.line_ending();
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.raw.replace('\n', ending))
            .collect();
        let mut out = rendered.join(ending);
        if self.trailing_newline && !self.entries.is_empty() {
            out.push_str(ending);
        }
        out
    }

    /// Write the manifest back to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("Manifest has no backing file to save to")?;
        fs::write(path, self.render())
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Normalized name of an entry that binds one, for find/upsert/remove
fn entry_name(entry: &Entry) -> Option<String> {
    match &entry.kind {
        LineKind::Requirement(req) => Some(req.normalized_name()),
        LineKind::DirectRef {
            name: Some(name), ..
        } => Some(normalize_name(name)),
        _ => None,
    }
}
