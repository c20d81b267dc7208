//! Lint rules for requirements manifests
//!
//! Rules:
//! - E001 syntax: a line failed to parse
//! - E002 duplicate: a name appears more than once; error when the
//!   constraints conflict, warning when they are identical
//! - E003 conflict: a single entry's constraint set is unsatisfiable
//! - W001 unpinned: no constraint at all (--strict only)
//! - W002 loose pin: lower bound with no upper bound (--strict only)

use std::collections::HashMap;
use std::path::PathBuf;

use crate::manifest::parser::LineKind;
use crate::manifest::Manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One lint finding, attributed to a manifest line
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub file: Option<PathBuf>,
    pub line: usize,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: &'static str, line: usize, message: String) -> Self {
        Diagnostic {
            severity,
            code,
            file: None,
            line,
            message,
            hint: None,
        }
    }
}

/// Lint one manifest in isolation (everything except duplicate detection)
pub fn lint_manifest(manifest: &Manifest, strict: bool) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for entry in manifest.entries() {
        match &entry.kind {
            LineKind::Invalid(message) => {
                let mut d = Diagnostic::new(
                    Severity::Error,
                    "E001",
                    entry.lineno,
                    message.clone(),
                );
                d.hint = Some(crate::error::hints::invalid_requirement().to_string());
                diagnostics.push(d);
            }
            LineKind::Requirement(req) => {
                if req.specifiers.is_obviously_unsatisfiable() {
                    diagnostics.push(Diagnostic::new(
                        Severity::Error,
                        "E003",
                        req.line,
                        format!(
                            "'{}' has an unsatisfiable constraint set '{}'",
                            req.name, req.specifiers
                        ),
                    ));
                }
                if strict && req.specifiers.is_empty() {
                    diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        "W001",
                        req.line,
                        format!("'{}' has no version constraint", req.name),
                    ));
                }
                if strict && req.specifiers.is_unbounded_above() {
                    diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        "W002",
                        req.line,
                        format!(
                            "'{}' has a lower bound but nothing capping it ('{}')",
                            req.name, req.specifiers
                        ),
                    ));
                }
            }
            _ => {}
        }
    }

    for d in &mut diagnostics {
        d.file = manifest.path.clone();
    }
    diagnostics
}

/// Detect names declared more than once across a set of manifests.
///
/// Identical redeclarations are warnings; conflicting constraints are errors
/// (the manifest property being checked is "each name appears at most once
/// with one constraint").
pub fn lint_duplicates(manifests: &[Manifest]) -> Vec<Diagnostic> {
    // name -> (where first seen, its constraint text)
    let mut first_seen: HashMap<String, (Option<PathBuf>, usize, String)> = HashMap::new();
    let mut diagnostics = Vec::new();

    for manifest in manifests {
        for req in manifest.requirements() {
            let key = req.normalized_name();
            let constraint = req.specifiers.to_string();
            match first_seen.get(&key) {
                None => {
                    first_seen.insert(key, (manifest.path.clone(), req.line, constraint));
                }
                Some((first_file, first_line, first_constraint)) => {
                    let conflicting = *first_constraint != constraint;
                    let location = match first_file {
                        Some(p) => format!("{}:{}", p.display(), first_line),
                        None => format!("line {}", first_line),
                    };
                    let mut d = Diagnostic::new(
                        if conflicting {
                            Severity::Error
                        } else {
                            Severity::Warning
                        },
                        "E002",
                        req.line,
                        if conflicting {
                            format!(
                                "'{}' already declared at {} with a different constraint \
                                 ('{}' vs '{}')",
                                req.name, location, first_constraint, constraint
                            )
                        } else {
                            format!("'{}' already declared at {}", req.name, location)
                        },
                    );
                    d.file = manifest.path.clone();
                    if conflicting {
                        d.hint =
                            Some("Keep one entry per package and merge the constraints".to_string());
                    }
                    diagnostics.push(d);
                }
            }
        }
    }
    diagnostics
}

/// Full lint pass over a manifest set
pub fn lint_all(manifests: &[Manifest], strict: bool) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for manifest in manifests {
        diagnostics.extend(lint_manifest(manifest, strict));
    }
    diagnostics.extend(lint_duplicates(manifests));
    diagnostics
}
