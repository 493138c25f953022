use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::normalize::{normalize, Normalized, DEV_SENTINEL};
use crate::error::{PleasingError, Result};

/// Build tag carried by the development branch sentinel
pub const DEV_BUILD: &str = "dev-master";

fn grammar() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.?(0|[1-9]\d*)?\.?(0|[1-9]\d*)?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
        )
        .expect("version grammar is valid")
    })
}

/// Semantic version as found in a package manifest.
///
/// Keeps `major.minor.patch` plus an optional free-form build tag. The
/// `raw` text is the exact string the value was parsed from (minus a
/// leading `v`) so that it can be searched for verbatim in source files.
/// Prerelease and metadata parts of the input are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    build: Option<String>,
    raw: String,
}

/// Version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl SemanticVersion {
    /// Create a version without a build tag
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let mut version = SemanticVersion {
            major,
            minor,
            patch,
            build: None,
            raw: String::new(),
        };
        version.raw = version.to_string();
        version
    }

    /// The unversioned development branch (`9999999-dev`)
    pub fn dev() -> Self {
        SemanticVersion {
            major: 0,
            minor: 0,
            patch: 0,
            build: Some(DEV_BUILD.to_string()),
            raw: DEV_SENTINEL.to_string(),
        }
    }

    /// Parse a version string (e.g. "v1.2.3", "1.2", "1.2.3.4", "9999999-dev")
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_dropped(input).map(|(version, _)| version)
    }

    /// Parse a version string, also returning the prerelease/metadata
    /// suffix that the model could not keep.
    pub fn parse_with_dropped(input: &str) -> Result<(Self, Option<String>)> {
        let normalized = match normalize(input) {
            Some(Normalized::Release(normalized)) => normalized,
            Some(Normalized::DevBranch) => return Ok((Self::dev(), None)),
            None => {
                return Err(PleasingError::invalid_version(format!(
                    "could not parse version number '{}'",
                    input
                )))
            }
        };

        let caps = grammar().captures(&normalized).ok_or_else(|| {
            PleasingError::invalid_version(format!(
                "'{}' (normalized to '{}') is not a semantic version",
                input, normalized
            ))
        })?;

        let number = |index: usize| -> Result<u64> {
            caps.get(index)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map(|n| n.unwrap_or(0))
                .map_err(|e| PleasingError::invalid_version(format!("'{}': {}", input, e)))
        };

        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;
        let build = match number(4)? {
            0 => None,
            n => Some(n.to_string()),
        };

        let dropped = match (caps.get(5), caps.get(6)) {
            (None, None) => None,
            (pre, meta) => {
                let mut suffix = String::new();
                if let Some(pre) = pre {
                    suffix.push('-');
                    suffix.push_str(pre.as_str());
                }
                if let Some(meta) = meta {
                    suffix.push('+');
                    suffix.push_str(meta.as_str());
                }
                Some(suffix)
            }
        };

        let major_text = major.to_string();
        let raw = match input.strip_prefix('v') {
            Some(rest) if rest.starts_with(&major_text) => rest.to_string(),
            _ => input.to_string(),
        };

        Ok((
            SemanticVersion {
                major,
                minor,
                patch,
                build,
                raw,
            },
            dropped,
        ))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The literal text this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns a copy with the build tag replaced. An empty tag clears it.
    pub fn with_build(&self, tag: &str) -> Self {
        let mut next = SemanticVersion {
            build: (!tag.is_empty()).then(|| tag.to_string()),
            ..self.clone()
        };
        next.raw = next.to_string();
        next
    }

    /// Returns the next version, incrementing one component by `amount`.
    ///
    /// The build tag is dropped. Lower components are kept as they are
    /// unless `cascade_reset` is set, in which case they are zeroed as in
    /// conventional semantic versioning.
    pub fn bump(&self, bump: VersionBump, amount: u64, cascade_reset: bool) -> Result<Self> {
        let overflow = || {
            PleasingError::invalid_version(format!(
                "incrementing {} by {} overflows",
                self, amount
            ))
        };

        let (major, minor, patch) = match bump {
            VersionBump::Major => {
                let major = self.major.checked_add(amount).ok_or_else(overflow)?;
                if cascade_reset {
                    (major, 0, 0)
                } else {
                    (major, self.minor, self.patch)
                }
            }
            VersionBump::Minor => {
                let minor = self.minor.checked_add(amount).ok_or_else(overflow)?;
                if cascade_reset {
                    (self.major, minor, 0)
                } else {
                    (self.major, minor, self.patch)
                }
            }
            VersionBump::Patch => {
                let patch = self.patch.checked_add(amount).ok_or_else(overflow)?;
                (self.major, self.minor, patch)
            }
        };

        Ok(SemanticVersion::new(major, minor, patch))
    }

    /// Ordering key for this version.
    ///
    /// A build tag sorts like a semver prerelease since it renders after a
    /// hyphen. Tags that are not valid prerelease identifiers are ignored.
    pub fn precedence(&self) -> semver::Version {
        semver::Version::parse(&self.to_string())
            .unwrap_or_else(|_| semver::Version::new(self.major, self.minor, self.patch))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build.as_deref().filter(|b| !b.is_empty()) {
            write!(f, "-{}", build)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for SemanticVersion {
    type Err = PleasingError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}
