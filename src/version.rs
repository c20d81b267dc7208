//! PEP 440 version parsing and specifier matching
//!
//! Supports the constraint forms found in pip requirements manifests:
//! - Exact: "==1.2.3" (with wildcard "==1.2.*")
//! - Exclusion: "!=1.2.3" (with wildcard "!=1.2.*")
//! - Greater/Less: ">=1.0", "<=2.0", ">1.0", "<2.0"
//! - Compatible release: "~=1.4.2" (>= 1.4.2, == 1.4.*)
//! - Arbitrary equality: "===anything"
//! - Range: ">=1.2.0,<1.8.0"

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// A PEP 440 version: [epoch!]release[pre][.postN][.devN][+local]
#[derive(Debug, Clone)]
pub struct Version {
    pub epoch: u64,
    pub release: Vec<u64>,
    pub pre: Option<(PreTag, u64)>,
    pub post: Option<u64>,
    pub dev: Option<u64>,
    pub local: Vec<LocalSegment>,
}

/// Pre-release phase tag, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreTag {
    Alpha,
    Beta,
    Rc,
}

/// One dot-separated segment of a local version label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSegment {
    Number(u64),
    Text(String),
}

impl Version {
    /// Parse a version string like "2.31.0", "4.2rc1" or "1!1.0.post2"
    pub fn parse(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let normalized = lowered.strip_prefix('v').unwrap_or(&lowered);
        if normalized.is_empty() {
            bail!("Empty version string");
        }

        // PEP 440 grammar with the alternate spellings it normalizes away
        let re = Regex::new(
            r"(?x)^
            (?:(?P<epoch>\d+)!)?
            (?P<release>\d+(?:\.\d+)*)
            (?:[-_.]?(?P<pre_tag>alpha|beta|preview|pre|rc|a|b|c)[-_.]?(?P<pre_n>\d+)?)?
            (?P<post>-(?P<post_bare>\d+)|[-_.]?(?:post|rev|r)[-_.]?(?P<post_n>\d+)?)?
            (?P<dev>[-_.]?dev[-_.]?(?P<dev_n>\d+)?)?
            (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
            $",
        )
        .unwrap();

        let caps = match re.captures(normalized) {
            Some(caps) => caps,
            None => bail!(
                "Invalid version: '{}'. Expected a PEP 440 version like '1.2.3' or '4.2rc1'",
                s.trim()
            ),
        };

        let epoch = match caps.name("epoch") {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .with_context(|| format!("Invalid epoch in version '{}'", s.trim()))?,
            None => 0,
        };

        let release = caps["release"]
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .with_context(|| format!("Invalid release segment '{}'", part))
            })
            .collect::<Result<Vec<u64>>>()?;

        let pre = caps.name("pre_tag").map(|tag| {
            let tag = match tag.as_str() {
                "a" | "alpha" => PreTag::Alpha,
                "b" | "beta" => PreTag::Beta,
                // "c", "pre" and "preview" normalize to rc
                _ => PreTag::Rc,
            };
            let n = caps
                .name("pre_n")
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0));
            (tag, n)
        });

        let post = if caps.name("post").map_or(false, |m| !m.as_str().is_empty()) {
            let n = caps
                .name("post_bare")
                .or_else(|| caps.name("post_n"))
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0));
            Some(n)
        } else {
            None
        };

        let dev = if caps.name("dev").map_or(false, |m| !m.as_str().is_empty()) {
            Some(
                caps.name("dev_n")
                    .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0)),
            )
        } else {
            None
        };

        let local = match caps.name("local") {
            Some(m) => m
                .as_str()
                .split(['-', '_', '.'])
                .map(|seg| match seg.parse::<u64>() {
                    Ok(n) => LocalSegment::Number(n),
                    Err(_) => LocalSegment::Text(seg.to_string()),
                })
                .collect(),
            None => vec![],
        };

        Ok(Version {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    /// Check if this version matches a specifier set
    pub fn matches(&self, specs: &SpecifierSet) -> bool {
        specs.contains(self)
    }

    /// True for a final release (no pre-release or dev segment)
    pub fn is_stable(&self) -> bool {
        self.pre.is_none() && self.dev.is_none()
    }

    /// Release segment at `idx`, zero-padded past the end
    fn release_segment(&self, idx: usize) -> u64 {
        self.release.get(idx).copied().unwrap_or(0)
    }

    /// Compare release tuples, padding the shorter with zeros
    fn cmp_release(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        for i in 0..len {
            match self.release_segment(i).cmp(&other.release_segment(i)) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Copy without the local label, for comparisons against unlabeled specifiers
    fn without_local(&self) -> Self {
        Version {
            local: vec![],
            ..self.clone()
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release: Vec<String> = self.release.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", release.join("."))?;
        if let Some((tag, n)) = self.pre {
            let tag = match tag {
                PreTag::Alpha => "a",
                PreTag::Beta => "b",
                PreTag::Rc => "rc",
            };
            write!(f, "{}{}", tag, n)?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{}", post)?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{}", dev)?;
        }
        if !self.local.is_empty() {
            let segs: Vec<String> = self
                .local
                .iter()
                .map(|seg| match seg {
                    LocalSegment::Number(n) => n.to_string(),
                    LocalSegment::Text(t) => t.clone(),
                })
                .collect();
            write!(f, "+{}", segs.join("."))?;
        }
        Ok(())
    }
}

// Equality must agree with ordering, where "1.2" == "1.2.0"
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.epoch.cmp(&other.epoch) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.cmp_release(other) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Phase: dev-only < pre-release < final/post
        match pre_rank(self).cmp(&pre_rank(other)) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.pre.cmp(&other.pre) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.post.cmp(&other.post) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // A dev release sorts before the corresponding non-dev release
        match (self.dev, other.dev) {
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            },
            (None, None) => {}
        }

        cmp_local(&self.local, &other.local)
    }
}

/// Coarse phase rank within one release tuple
fn pre_rank(v: &Version) -> u8 {
    if v.pre.is_some() {
        1
    } else if v.dev.is_some() && v.post.is_none() {
        0
    } else {
        2
    }
}

/// Compare local labels: absent < present, text < numbers, segment-wise
fn cmp_local(a: &[LocalSegment], b: &[LocalSegment]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = match (x, y) {
            (LocalSegment::Number(m), LocalSegment::Number(n)) => m.cmp(n),
            (LocalSegment::Text(s), LocalSegment::Text(t)) => s.cmp(t),
            (LocalSegment::Number(_), LocalSegment::Text(_)) => Ordering::Greater,
            (LocalSegment::Text(_), LocalSegment::Number(_)) => Ordering::Less,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// Version comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,          // ==1.2.3
    Ne,          // !=1.2.3
    Ge,          // >=1.2.3
    Le,          // <=1.2.3
    Gt,          // >1.2.3
    Lt,          // <1.2.3
    Compatible,  // ~=1.2.3
    ArbitraryEq, // ===string
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Ge => ">=",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Compatible => "~=",
            Op::ArbitraryEq => "===",
        }
    }
}

/// A single operator + version constraint
#[derive(Debug, Clone, PartialEq)]
pub struct Specifier {
    op: Op,
    version: Version,
    /// Number of release segments before a trailing ".*", if any
    wildcard_len: Option<usize>,
    /// Verbatim version text, needed for === comparisons and display
    raw: String,
}

impl Specifier {
    /// Parse a single specifier like ">=2.31" or "==4.2.*"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Empty version specifier");
        }

        let (op, rest) = if let Some(rest) = s.strip_prefix("===") {
            (Op::ArbitraryEq, rest)
        } else if let Some(rest) = s.strip_prefix("==") {
            (Op::Eq, rest)
        } else if let Some(rest) = s.strip_prefix("!=") {
            (Op::Ne, rest)
        } else if let Some(rest) = s.strip_prefix("~=") {
            (Op::Compatible, rest)
        } else if let Some(rest) = s.strip_prefix(">=") {
            (Op::Ge, rest)
        } else if let Some(rest) = s.strip_prefix("<=") {
            (Op::Le, rest)
        } else if let Some(rest) = s.strip_prefix('>') {
            (Op::Gt, rest)
        } else if let Some(rest) = s.strip_prefix('<') {
            (Op::Lt, rest)
        } else if s.starts_with('=') {
            bail!(
                "Invalid operator in '{}': use '==' for exact pins (single '=' is not a pip operator)",
                s
            );
        } else {
            bail!(
                "Missing operator in '{}'. Recognized operators: ==, !=, >=, <=, >, <, ~=, ===",
                s
            );
        };

        let raw = rest.trim().to_string();
        if raw.is_empty() {
            bail!("Missing version after '{}' operator", op.as_str());
        }

        // === is a verbatim string comparison and accepts anything
        if op == Op::ArbitraryEq {
            return Ok(Specifier {
                op,
                version: Version {
                    epoch: 0,
                    release: vec![0],
                    pre: None,
                    post: None,
                    dev: None,
                    local: vec![],
                },
                wildcard_len: None,
                raw,
            });
        }

        let (version_text, wildcard) = match raw.strip_suffix(".*") {
            Some(prefix) => (prefix, true),
            None => (raw.as_str(), false),
        };
        if wildcard && !matches!(op, Op::Eq | Op::Ne) {
            bail!(
                "Wildcard '.*' is only valid with == or != (got '{}{}')",
                op.as_str(),
                raw
            );
        }

        let version = Version::parse(version_text)
            .with_context(|| format!("Invalid version in specifier '{}{}'", op.as_str(), raw))?;

        if op == Op::Compatible && version.release.len() < 2 {
            bail!(
                "Compatible release '~={}' needs at least two release segments (like '~=2.2')",
                raw
            );
        }
        if wildcard && (version.pre.is_some() || version.dev.is_some() || version.post.is_some()) {
            bail!(
                "Wildcard '.*' must follow plain release segments (got '{}')",
                raw
            );
        }

        let wildcard_len = if wildcard {
            Some(version.release.len())
        } else {
            None
        };

        Ok(Specifier {
            op,
            version,
            wildcard_len,
            raw,
        })
    }

    /// Check if a version satisfies this specifier
    pub fn contains(&self, version: &Version) -> bool {
        match self.op {
            Op::ArbitraryEq => version.to_string() == self.raw,
            Op::Eq => self.matches_eq(version),
            Op::Ne => !self.matches_eq(version),
            Op::Ge => version.without_local() >= self.version,
            Op::Le => version.without_local() <= self.version,
            Op::Gt => version.without_local() > self.version,
            Op::Lt => version.without_local() < self.version,
            Op::Compatible => self.matches_compatible(version),
        }
    }

    fn matches_eq(&self, version: &Version) -> bool {
        if let Some(len) = self.wildcard_len {
            // ==1.2.* compares the epoch plus the release prefix
            if version.epoch != self.version.epoch {
                return false;
            }
            return (0..len)
                .all(|i| version.release_segment(i) == self.version.release_segment(i));
        }
        // An unlabeled specifier matches any local label on the candidate
        if self.version.local.is_empty() {
            version.without_local() == self.version
        } else {
            *version == self.version
        }
    }

    /// ~=X.Y.Z is >=X.Y.Z combined with ==X.Y.*
    fn matches_compatible(&self, version: &Version) -> bool {
        if version.epoch != self.version.epoch {
            return false;
        }
        if version.without_local() < self.version {
            return false;
        }
        let prefix_len = self.version.release.len() - 1;
        (0..prefix_len).all(|i| version.release_segment(i) == self.version.release_segment(i))
    }

    /// Lower bound implied by this specifier, as (version, inclusive)
    fn lower_bound(&self) -> Option<(Version, bool)> {
        match self.op {
            Op::Eq | Op::Ge | Op::Compatible => Some((self.version.clone(), true)),
            Op::Gt => Some((self.version.clone(), false)),
            _ => None,
        }
    }

    /// Upper bound implied by this specifier, as (version, inclusive)
    fn upper_bound(&self) -> Option<(Version, bool)> {
        match self.op {
            Op::Eq => match self.wildcard_len {
                Some(len) => Some((bump_release(&self.version, len), false)),
                None => Some((self.version.clone(), true)),
            },
            Op::Le => Some((self.version.clone(), true)),
            Op::Lt => Some((self.version.clone(), false)),
            Op::Compatible => {
                let len = self.version.release.len() - 1;
                Some((bump_release(&self.version, len), false))
            }
            _ => None,
        }
    }
}

/// Version whose release prefix of `len` segments is incremented in its last
/// place, e.g. bump(1.4.2, 2) = 1.5
fn bump_release(v: &Version, len: usize) -> Version {
    let mut release: Vec<u64> = (0..len).map(|i| v.release_segment(i)).collect();
    if let Some(last) = release.last_mut() {
        *last += 1;
    }
    Version {
        epoch: v.epoch,
        release,
        pre: None,
        post: None,
        dev: None,
        local: vec![],
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.as_str(), self.raw)
    }
}

/// A comma-separated conjunction of specifiers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecifierSet {
    specifiers: Vec<Specifier>,
}

impl SpecifierSet {
    /// Parse a specifier set like ">=1.2,<2.0" (empty input is the empty set)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SpecifierSet::default());
        }
        let specifiers = s
            .split(',')
            .map(|part| Specifier::parse(part.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(SpecifierSet { specifiers })
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    /// Check if a version satisfies every specifier (AND logic)
    pub fn contains(&self, version: &Version) -> bool {
        self.specifiers.iter().all(|s| s.contains(version))
    }

    /// True when the set pins an exact version (a single == without wildcard)
    pub fn is_exact_pin(&self) -> bool {
        self.specifiers.len() == 1
            && matches!(self.specifiers[0].op, Op::Eq | Op::ArbitraryEq)
            && self.specifiers[0].wildcard_len.is_none()
    }

    /// True when the set has a lower bound but nothing capping it above
    pub fn is_unbounded_above(&self) -> bool {
        let has_lower = self
            .specifiers
            .iter()
            .any(|s| matches!(s.op, Op::Ge | Op::Gt));
        let has_upper = self.specifiers.iter().any(|s| s.upper_bound().is_some());
        has_lower && !has_upper
    }

    /// Detect sets that are unsatisfiable on their face, like "==1.0,>=2.0".
    ///
    /// Approximates each specifier as an interval and intersects. != and ===
    /// members carry no bounds, so a `true` is definite but `false` is not a
    /// satisfiability proof.
    pub fn is_obviously_unsatisfiable(&self) -> bool {
        let mut lower: Option<(Version, bool)> = None;
        let mut upper: Option<(Version, bool)> = None;

        for spec in &self.specifiers {
            if let Some((v, incl)) = spec.lower_bound() {
                lower = Some(match lower {
                    Some((cur, cur_incl)) => match v.cmp(&cur) {
                        Ordering::Greater => (v, incl),
                        Ordering::Equal => (cur, cur_incl && incl),
                        Ordering::Less => (cur, cur_incl),
                    },
                    None => (v, incl),
                });
            }
            if let Some((v, incl)) = spec.upper_bound() {
                upper = Some(match upper {
                    Some((cur, cur_incl)) => match v.cmp(&cur) {
                        Ordering::Less => (v, incl),
                        Ordering::Equal => (cur, cur_incl && incl),
                        Ordering::Greater => (cur, cur_incl),
                    },
                    None => (v, incl),
                });
            }
        }

        match (lower, upper) {
            (Some((lo, lo_incl)), Some((hi, hi_incl))) => match lo.cmp(&hi) {
                Ordering::Greater => true,
                Ordering::Equal => !(lo_incl && hi_incl),
                Ordering::Less => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.specifiers.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("2.31.0").unwrap();
        assert_eq!(v.release, vec![2, 31, 0]);
        assert_eq!(v.epoch, 0);
        assert!(v.is_stable());

        let v = Version::parse("4.2rc1").unwrap();
        assert_eq!(v.pre, Some((PreTag::Rc, 1)));

        let v = Version::parse("1!2.0.post3").unwrap();
        assert_eq!(v.epoch, 1);
        assert_eq!(v.post, Some(3));

        let v = Version::parse("1.0.dev4").unwrap();
        assert_eq!(v.dev, Some(4));
    }

    #[test]
    fn test_version_parse_normalization() {
        // Alternate spellings normalize per PEP 440
        assert_eq!(
            Version::parse("1.0alpha2").unwrap(),
            Version::parse("1.0a2").unwrap()
        );
        assert_eq!(
            Version::parse("1.0-c-3").unwrap(),
            Version::parse("1.0rc3").unwrap()
        );
        assert_eq!(
            Version::parse("v1.2.3").unwrap(),
            Version::parse("1.2.3").unwrap()
        );
        assert_eq!(Version::parse("1.0RC1").unwrap().to_string(), "1.0rc1");
        assert_eq!(Version::parse("1.0-post-2").unwrap().to_string(), "1.0.post2");
    }

    #[test]
    fn test_version_parse_rejects_garbage() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("abc").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("1..2").is_err());
    }

    #[test]
    fn test_version_ordering() {
        let parse = |s| Version::parse(s).unwrap();
        assert!(parse("1.2.3") < parse("1.2.4"));
        assert!(parse("1.9") < parse("1.10"));
        assert!(parse("1.2") < parse("1.2.1"));
        assert_eq!(parse("1.2"), parse("1.2.0"));
        assert!(parse("0!2.0") < parse("1!1.0"));

        // dev < alpha < beta < rc < final < post
        assert!(parse("1.0.dev1") < parse("1.0a1"));
        assert!(parse("1.0a1") < parse("1.0b1"));
        assert!(parse("1.0b1") < parse("1.0rc1"));
        assert!(parse("1.0rc1") < parse("1.0"));
        assert!(parse("1.0") < parse("1.0.post1"));
        assert!(parse("1.0rc1.dev1") < parse("1.0rc1"));

        // local label outranks no label
        assert!(parse("1.0") < parse("1.0+local"));
        assert!(parse("1.0+abc") < parse("1.0+abc.1"));
    }

    #[test]
    fn test_specifier_exact() {
        let spec = Specifier::parse("==2.31.0").unwrap();
        assert!(spec.contains(&Version::parse("2.31.0").unwrap()));
        assert!(!spec.contains(&Version::parse("2.31.1").unwrap()));
        // Zero-padding: ==2.31 matches 2.31.0
        let spec = Specifier::parse("==2.31").unwrap();
        assert!(spec.contains(&Version::parse("2.31.0").unwrap()));
    }

    #[test]
    fn test_specifier_wildcard() {
        let spec = Specifier::parse("==4.2.*").unwrap();
        assert!(spec.contains(&Version::parse("4.2").unwrap()));
        assert!(spec.contains(&Version::parse("4.2.16").unwrap()));
        assert!(!spec.contains(&Version::parse("4.3").unwrap()));

        let spec = Specifier::parse("!=4.2.*").unwrap();
        assert!(!spec.contains(&Version::parse("4.2.1").unwrap()));
        assert!(spec.contains(&Version::parse("4.3.0").unwrap()));

        // Wildcard only valid on == / !=
        assert!(Specifier::parse(">=1.2.*").is_err());
    }

    #[test]
    fn test_specifier_compatible_release() {
        let spec = Specifier::parse("~=2.2").unwrap();
        assert!(spec.contains(&Version::parse("2.2").unwrap()));
        assert!(spec.contains(&Version::parse("2.9.5").unwrap()));
        assert!(!spec.contains(&Version::parse("3.0").unwrap()));
        assert!(!spec.contains(&Version::parse("2.1.9").unwrap()));

        let spec = Specifier::parse("~=1.4.2").unwrap();
        assert!(spec.contains(&Version::parse("1.4.2").unwrap()));
        assert!(spec.contains(&Version::parse("1.4.9").unwrap()));
        assert!(!spec.contains(&Version::parse("1.5.0").unwrap()));

        // ~= needs at least two release segments
        assert!(Specifier::parse("~=2").is_err());
    }

    #[test]
    fn test_specifier_arbitrary_equality() {
        let spec = Specifier::parse("===1.0").unwrap();
        assert!(spec.contains(&Version::parse("1.0").unwrap()));
        assert!(!spec.contains(&Version::parse("1.0.0").unwrap()));
    }

    #[test]
    fn test_specifier_bad_operator() {
        assert!(Specifier::parse("=1.0").is_err());
        assert!(Specifier::parse("1.0").is_err());
        assert!(Specifier::parse("==").is_err());
    }

    #[test]
    fn test_specifier_set_range() {
        let specs = SpecifierSet::parse(">=1.2.0,<1.8.0").unwrap();
        assert!(!specs.contains(&Version::parse("1.1.9").unwrap()));
        assert!(specs.contains(&Version::parse("1.2.0").unwrap()));
        assert!(specs.contains(&Version::parse("1.5.0").unwrap()));
        assert!(!specs.contains(&Version::parse("1.8.0").unwrap()));
    }

    #[test]
    fn test_specifier_set_empty() {
        let specs = SpecifierSet::parse("").unwrap();
        assert!(specs.is_empty());
        assert!(specs.contains(&Version::parse("0.0.1").unwrap()));
    }

    #[test]
    fn test_exact_pin_detection() {
        assert!(SpecifierSet::parse("==1.2.3").unwrap().is_exact_pin());
        assert!(!SpecifierSet::parse("==1.2.*").unwrap().is_exact_pin());
        assert!(!SpecifierSet::parse(">=1.2.3").unwrap().is_exact_pin());
        assert!(!SpecifierSet::parse("==1.2,<2").unwrap().is_exact_pin());
    }

    #[test]
    fn test_unbounded_above() {
        assert!(SpecifierSet::parse(">=2.1").unwrap().is_unbounded_above());
        assert!(!SpecifierSet::parse(">=2.1,<3").unwrap().is_unbounded_above());
        assert!(!SpecifierSet::parse("~=2.1").unwrap().is_unbounded_above());
        assert!(!SpecifierSet::parse("==2.1").unwrap().is_unbounded_above());
    }

    #[test]
    fn test_obvious_conflicts() {
        let conflict = |s: &str| SpecifierSet::parse(s).unwrap().is_obviously_unsatisfiable();
        assert!(conflict("==1.0,>=2.0"));
        assert!(conflict(">3.0,<2.0"));
        assert!(conflict(">=2.0,<2.0"));
        assert!(conflict("~=1.4,>=2.0"));
        assert!(!conflict(">=1.2,<1.8"));
        assert!(!conflict("==1.5,>=1.2"));
        assert!(!conflict("!=1.0,>=2.0"));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["==2.31.0", ">=1.2,<2.0", "~=4.2", "==1.2.*", "===1.0.x"] {
            let specs = SpecifierSet::parse(s).unwrap();
            assert_eq!(specs.to_string(), s);
        }
    }
}
