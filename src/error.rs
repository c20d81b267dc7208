//! Error types and helpers for user-friendly error messages
//!
//! Errors carry actionable hints so a broken manifest or a mistyped
//! requirement points at its own fix.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ReqlintError {
    /// Manifest file errors (missing file, unreadable, include problems)
    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// A requirement string that does not parse
    #[error("Invalid requirement '{requirement}': {message}")]
    Requirement {
        requirement: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },
}

impl ReqlintError {
    /// Create a manifest error with a hint
    pub fn manifest_error_with_hint(
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Manifest {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a requirement error with source and hint
    pub fn requirement_error_with_hint(
        requirement: impl Into<String>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Requirement {
            requirement: requirement.into(),
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            ReqlintError::Manifest { hint, .. } | ReqlintError::Requirement { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
        }
        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for a manifest file that cannot be read
    pub fn manifest_not_found() -> &'static str {
        "Check the path (requirements manifests are usually named requirements.txt\n\
         or live under requirements/). Paths in '-r' lines are resolved relative\n\
         to the file that contains them."
    }

    /// Get hint for an include cycle
    pub fn include_cycle() -> &'static str {
        "A '-r' include chain loops back on itself. Remove one of the includes\n\
         in the cycle; shared entries belong in a common base file included by\n\
         both sides."
    }

    /// Get hint for an invalid requirement string
    pub fn invalid_requirement() -> &'static str {
        "A requirement is 'name[extras]constraint', for example:\n\
         • requests>=2.31\n\
         • Django~=4.2\n\
         • celery[redis]>=5.3,<6\n\
         Use '==' (not '=') for exact pins."
    }
}
