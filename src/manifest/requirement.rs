//! Requirement records parsed from manifest lines
//!
//! A requirement is `name[extras]specifiers ; marker`, e.g.
//! `requests[security]>=2.31,<3.0 ; python_version >= "3.9"`.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::version::SpecifierSet;

/// A single dependency entry from a requirements manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    /// Package name as written in the manifest
    pub name: String,
    /// Optional extras, e.g. `["security", "socks"]`
    pub extras: Vec<String>,
    /// Version constraint conjunction (empty means unconstrained)
    pub specifiers: SpecifierSet,
    /// Environment marker text after `;`, kept verbatim
    pub marker: Option<String>,
    /// 1-based source line, 0 for requirements built programmatically
    pub line: usize,
}

impl Requirement {
    /// Parse a requirement string like "django~=4.2" or "celery[redis]>=5.3"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Empty requirement");
        }

        // Environment marker comes after ';' and is preserved, not evaluated
        let (body, marker) = match s.split_once(';') {
            Some((body, marker)) => {
                let marker = marker.trim();
                if marker.is_empty() {
                    bail!("Empty environment marker after ';' in '{}'", s);
                }
                (body.trim(), Some(marker.to_string()))
            }
            None => (s, None),
        };

        let re = Regex::new(
            r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[(?P<extras>[^\]]*)\])?\s*(?P<rest>.*)$",
        )
        .unwrap();
        let caps = match re.captures(body) {
            Some(caps) => caps,
            None => bail!(
                "Invalid package name in '{}': names start and end with a letter or digit \
                 and may contain '.', '-' and '_'",
                body
            ),
        };

        let name = caps["name"].to_string();

        let extras = match caps.name("extras") {
            Some(m) => parse_extras(m.as_str())
                .with_context(|| format!("Invalid extras in '{}'", body))?,
            None => vec![],
        };

        let mut rest = caps["rest"].trim();
        // PEP 508 allows the specifier list in parentheses
        if let Some(inner) = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
        {
            rest = inner.trim();
        }
        if !rest.is_empty() && !rest.starts_with(['=', '!', '<', '>', '~']) {
            bail!(
                "Unexpected text '{}' after package name '{}' (inline comments need a space \
                 before '#')",
                rest,
                name
            );
        }
        let specifiers = SpecifierSet::parse(rest)
            .with_context(|| format!("Invalid constraint for '{}'", name))?;

        Ok(Requirement {
            name,
            extras,
            specifiers,
            marker,
            line: 0,
        })
    }

    /// Canonical name for comparisons (PEP 503)
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if !self.specifiers.is_empty() {
            write!(f, "{}", self.specifiers)?;
        }
        if let Some(ref marker) = self.marker {
            write!(f, " ; {}", marker)?;
        }
        Ok(())
    }
}

/// Normalize a package name per PEP 503: lowercase, with runs of '-', '_'
/// and '.' collapsed to a single '-'
pub fn normalize_name(name: &str) -> String {
    // Called for every name comparison, so the regex is compiled once
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[-_.]+").unwrap());
    re.replace_all(&name.to_lowercase(), "-").into_owned()
}

fn parse_extras(text: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap();
    let extras: Vec<String> = text
        .split(',')
        .map(|e| e.trim().to_string())
        .collect();
    if extras.iter().any(|e| e.is_empty()) {
        bail!("Empty extra name in '[{}]'", text);
    }
    for extra in &extras {
        if !re.is_match(extra) {
            bail!("Invalid extra name '{}'", extra);
        }
    }
    Ok(extras)
}
