//! Version string normalization.
//!
//! Turns loosely written version strings (`v1.2`, `1.0.0-RC1`, `2.1beta3`,
//! `1.x-dev`, `dev-master`) into the canonical four-component dotted form
//! that [`SemanticVersion`](super::SemanticVersion) matches against.

use std::sync::OnceLock;

use regex::Regex;

/// Normalized form of the unversioned development branch.
pub const DEV_SENTINEL: &str = "9999999-dev";

/// Stands in for a wildcard or missing component of a numbered branch.
const BRANCH_WILDCARD: &str = "9999999";

/// Outcome of normalizing a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Canonical `M.m.p.b[-pre][+meta]` form
    Release(String),
    /// A development branch name (`dev-master`, `trunk`, `feature-dev`, `9999999-dev`)
    DevBranch,
}

fn classical_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.(\d+))?(?:[._-]?(stable|rc|beta|b|alpha|a|patch|pl|p)((?:[.-]?\d+)*))?([.-]?dev)?$",
        )
        .expect("classical version pattern is valid")
    })
}

fn default_branch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(?:dev-)?(?:master|trunk|default)$")
            .expect("default branch pattern is valid")
    })
}

/// Numbered branch such as `1.x-dev` or `2.0.*-dev`
fn numbered_branch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^v?(\d+)(?:\.(\d+|x|\*))?(?:\.(\d+|x|\*))?(?:\.(\d+|x|\*))?[.-]?dev$",
        )
        .expect("numbered branch pattern is valid")
    })
}

fn metadata_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").expect("metadata pattern is valid")
    })
}

/// Maps a stability keyword to its canonical spelling. `stable` has none.
fn canonical_stability(keyword: &str) -> Option<&'static str> {
    match keyword.to_ascii_lowercase().as_str() {
        "rc" => Some("RC"),
        "beta" | "b" => Some("beta"),
        "alpha" | "a" => Some("alpha"),
        "patch" | "pl" | "p" => Some("patch"),
        _ => None,
    }
}

/// `1.x-dev` becomes `1.9999999.9999999.9999999-dev`, `1.0.x-dev` becomes
/// `1.0.9999999.9999999-dev`.
fn normalize_numbered_branch(body: &str) -> Option<String> {
    let caps = numbered_branch_pattern().captures(body)?;
    let components = (1..=4)
        .map(|index| match caps.get(index).map(|m| m.as_str()) {
            Some(part) if part.bytes().all(|b| b.is_ascii_digit()) => {
                part.parse::<u64>().ok().map(|n| n.to_string())
            }
            _ => Some(BRANCH_WILDCARD.to_string()),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!("{}-dev", components.join(".")))
}

fn is_dev_branch(version: &str) -> bool {
    let lower = version.to_ascii_lowercase();
    lower == DEV_SENTINEL || lower.starts_with("dev-") || lower.ends_with("-dev")
}

/// Normalizes a version string.
///
/// Returns `None` when the input is neither a recognizable release version
/// nor a development branch name.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize("v1.2"), Some(Normalized::Release("1.2.0.0".into())));
/// assert_eq!(normalize("1.0.0-rc.1"), Some(Normalized::Release("1.0.0.0-RC1".into())));
/// assert_eq!(normalize("dev-master"), Some(Normalized::DevBranch));
/// ```
pub fn normalize(version: &str) -> Option<Normalized> {
    let version = version.trim();
    if version.is_empty() {
        return None;
    }

    if version.eq_ignore_ascii_case(DEV_SENTINEL)
        || default_branch_pattern().is_match(version)
        || version.to_ascii_lowercase().starts_with("dev-")
    {
        return Some(Normalized::DevBranch);
    }

    let (body, metadata) = match version.split_once('+') {
        Some((body, metadata)) => {
            if !metadata_pattern().is_match(metadata) {
                return None;
            }
            (body, Some(metadata))
        }
        None => (version, None),
    };

    let Some(caps) = classical_pattern().captures(body) else {
        if let Some(branch) = normalize_numbered_branch(body) {
            return Some(Normalized::Release(branch));
        }
        return is_dev_branch(body).then_some(Normalized::DevBranch);
    };

    let mut numbers = [0u64; 4];
    for (slot, index) in numbers.iter_mut().zip(1..=4) {
        if let Some(m) = caps.get(index) {
            *slot = m.as_str().parse().ok()?;
        }
    }

    let mut normalized = format!(
        "{}.{}.{}.{}",
        numbers[0], numbers[1], numbers[2], numbers[3]
    );

    if let Some(stability) = caps.get(5).and_then(|m| canonical_stability(m.as_str())) {
        let digits: String = caps
            .get(6)
            .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect())
            .unwrap_or_default();
        normalized.push('-');
        normalized.push_str(stability);
        normalized.push_str(&digits);
    }

    if caps.get(7).is_some() {
        normalized.push_str("-dev");
    }

    if let Some(metadata) = metadata {
        normalized.push('+');
        normalized.push_str(metadata);
    }

    Some(Normalized::Release(normalized))
}
