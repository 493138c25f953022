use tracing::debug;

use super::version::{SemanticVersion, VersionBump};
use crate::error::{PleasingError, Result};

/// The single set/increment instruction selected for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionDirective {
    Set(String),
    IncrementMajor(u64),
    IncrementMinor(u64),
    IncrementPatch(u64),
    SetBuild(String),
}

/// Version-related command line options, passed around by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOptions {
    pub set: Option<String>,
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub build: Option<String>,
    pub increment: u64,
}

impl Default for VersionOptions {
    fn default() -> Self {
        VersionOptions {
            set: None,
            major: false,
            minor: false,
            patch: false,
            build: None,
            increment: 1,
        }
    }
}

impl VersionOptions {
    /// Selects the directive to apply.
    ///
    /// Options are checked in the fixed order set, major, minor, patch,
    /// build; the first one present wins. Empty `set`/`build` values count
    /// as absent.
    pub fn directive(&self) -> Option<VersionDirective> {
        if let Some(set) = self.set.as_deref().filter(|s| !s.is_empty()) {
            Some(VersionDirective::Set(set.to_string()))
        } else if self.major {
            Some(VersionDirective::IncrementMajor(self.increment))
        } else if self.minor {
            Some(VersionDirective::IncrementMinor(self.increment))
        } else if self.patch {
            Some(VersionDirective::IncrementPatch(self.increment))
        } else {
            self.build
                .as_deref()
                .filter(|b| !b.is_empty())
                .map(|b| VersionDirective::SetBuild(b.to_string()))
        }
    }
}

/// How numeric increments treat lower-order components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncrementPolicy {
    /// Zero minor/patch on a major bump and patch on a minor bump
    pub cascade_reset: bool,
}

/// Computes the version that follows `current` under `directive`.
pub fn next_version(
    current: &SemanticVersion,
    directive: &VersionDirective,
    policy: IncrementPolicy,
) -> Result<SemanticVersion> {
    debug!(current = %current, ?directive, "resolving next version");

    match directive {
        VersionDirective::Set(version) => SemanticVersion::parse(version),
        VersionDirective::IncrementMajor(n) => {
            current.bump(VersionBump::Major, *n, policy.cascade_reset)
        }
        VersionDirective::IncrementMinor(n) => {
            current.bump(VersionBump::Minor, *n, policy.cascade_reset)
        }
        VersionDirective::IncrementPatch(n) => {
            current.bump(VersionBump::Patch, *n, policy.cascade_reset)
        }
        VersionDirective::SetBuild(tag) => Ok(current.with_build(tag)),
    }
}

/// Resolves options straight to the next version.
///
/// Fails with [`PleasingError::NoDirectiveGiven`] when no option selects a
/// directive.
pub fn resolve(
    current: &SemanticVersion,
    options: &VersionOptions,
    policy: IncrementPolicy,
) -> Result<SemanticVersion> {
    let directive = options.directive().ok_or(PleasingError::NoDirectiveGiven)?;
    next_version(current, &directive, policy)
}
