//! Line classification for the requirements format
//!
//! One physical line (after backslash continuations are joined) is one of:
//! blank, comment, requirement, editable (-e), include (-r), constraint
//! file (-c), installer option (-i, --extra-index-url, --hash, ...) or a
//! direct URL/path reference. Anything else becomes an Invalid entry with
//! the parse error, so linting can report all broken lines in one pass.

use crate::manifest::requirement::Requirement;

/// Parsed classification of one logical manifest line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    Comment,
    Requirement(Requirement),
    /// `-e path` / `--editable path`
    Editable(String),
    /// `-r file` / `--requirement file`
    Include(String),
    /// `-c file` / `--constraint file`
    ConstraintFile(String),
    /// Any other `-`/`--` installer option, kept verbatim
    InstallOption(String),
    /// `name @ url` or a bare URL/path, kept verbatim
    DirectRef {
        name: Option<String>,
        target: String,
    },
    /// Line that failed to parse, with the error message
    Invalid(String),
}

/// Classify one logical line (continuations already joined, no terminator)
pub fn classify(line: &str, lineno: usize) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    // Inline comments need whitespace before the '#'
    let content = strip_inline_comment(trimmed).trim();
    if content.is_empty() {
        return LineKind::Blank;
    }

    if content.starts_with('-') {
        return classify_option(content);
    }

    // `name @ target` direct reference (PEP 508 URL form)
    if let Some((name, target)) = content.split_once(" @ ") {
        return LineKind::DirectRef {
            name: Some(name.trim().to_string()),
            target: target.trim().to_string(),
        };
    }
    if is_url_or_path(content) {
        return LineKind::DirectRef {
            name: None,
            target: content.to_string(),
        };
    }

    match Requirement::parse(content) {
        Ok(mut req) => {
            req.line = lineno;
            LineKind::Requirement(req)
        }
        Err(err) => LineKind::Invalid(format!("{:#}", err)),
    }
}

/// Drop an inline ` # ...` comment; a '#' glued to a token is kept
pub fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return &line[..i];
        }
    }
    line
}

fn classify_option(content: &str) -> LineKind {
    let (flag, arg) = split_option(content);
    match flag {
        "-r" | "--requirement" => match arg {
            Some(path) => LineKind::Include(path),
            None => LineKind::Invalid(format!("'{}' requires a file path", flag)),
        },
        "-c" | "--constraint" => match arg {
            Some(path) => LineKind::ConstraintFile(path),
            None => LineKind::Invalid(format!("'{}' requires a file path", flag)),
        },
        "-e" | "--editable" => match arg {
            Some(target) => LineKind::Editable(target),
            None => LineKind::Invalid(format!("'{}' requires a path or URL", flag)),
        },
        _ => LineKind::InstallOption(content.to_string()),
    }
}

/// Split "-r path", "--requirement path" or "--requirement=path"
fn split_option(content: &str) -> (&str, Option<String>) {
    if let Some((flag, arg)) = content.split_once('=') {
        if flag.starts_with("--") {
            let arg = arg.trim();
            return (flag, (!arg.is_empty()).then(|| arg.to_string()));
        }
    }
    match content.split_once(char::is_whitespace) {
        Some((flag, arg)) => {
            let arg = arg.trim();
            (flag, (!arg.is_empty()).then(|| arg.to_string()))
        }
        None => (content, None),
    }
}

fn is_url_or_path(content: &str) -> bool {
    content.contains("://")
        || content.starts_with("./")
        || content.starts_with("../")
        || content.starts_with('/')
        || content.starts_with("file:")
}
