//! Domain logic - version values and how they advance, independent of the file system

pub mod directive;
pub mod normalize;
pub mod version;

pub use directive::{next_version, resolve, IncrementPolicy, VersionDirective, VersionOptions};
pub use normalize::{normalize, Normalized, DEV_SENTINEL};
pub use version::{SemanticVersion, VersionBump};
