//! Propagating a new version string into files on disk.
//!
//! - `comment` - block comment scanner and in-comment replacement
//! - `tree` - walks the versioned folders and rewrites matching files
//! - `manifest` - rewrites the manifest's version field

pub mod comment;
pub mod manifest;
pub mod tree;

pub use comment::{block_comments, replace_in_comments};
pub use manifest::rewrite_manifest;
pub use tree::{FileFilter, FileOutcome, FileResult, RewriteReport, TreeRewriter};
