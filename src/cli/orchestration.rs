//! Version workflow orchestration
//!
//! Runs the `version` command end to end: find the manifest, work out the
//! next version, then rewrite the source tree and the manifest. CLI parsing
//! lives in `main.rs`; this module only sees the plain argument struct.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::domain::{resolve, SemanticVersion, VersionDirective, VersionOptions};
use crate::error::{PleasingError, Result};
use crate::manifest::{locate_manifest, read_manifest_version};
use crate::rewrite::{rewrite_manifest, FileOutcome, RewriteReport, TreeRewriter};
use crate::warning::VersionWarning;

/// Arguments for the version workflow
///
/// Mirrors the CLI arguments so the workflow can be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionWorkflowArgs {
    /// Path in which to find files to version (defaults to the working directory)
    pub src: Option<PathBuf>,

    /// Explicit manifest path
    pub composer: Option<PathBuf>,

    /// Set/increment options
    pub options: VersionOptions,

    /// Report what would change without writing
    pub dry_run: bool,
}

/// Result of a version workflow that got as far as rewriting files
#[derive(Debug)]
pub struct VersionReport {
    /// Canonical source path the folders were resolved against
    pub root: PathBuf,

    pub manifest: PathBuf,

    pub current: SemanticVersion,

    pub next: SemanticVersion,

    /// Per-file outcomes of the tree rewrite
    pub files: RewriteReport,

    /// Outcome of the manifest rewrite (`Updated` or `Failed`)
    pub manifest_outcome: FileOutcome,

    pub warnings: Vec<VersionWarning>,

    pub dry_run: bool,
}

impl VersionReport {
    /// Every path that failed to update, manifest last
    pub fn failures(&self) -> Vec<&Path> {
        let mut failed = self.files.failed();
        if matches!(self.manifest_outcome, FileOutcome::Failed(_)) {
            failed.push(self.manifest.as_path());
        }
        failed
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Main version workflow
///
/// 1. Locate the manifest and read the current version
/// 2. Resolve the next version from the options
/// 3. Rewrite version literals under the versioned folders
/// 4. Rewrite the manifest's version field
///
/// Errors in steps 1 and 2 are returned before anything is written.
/// Failures in steps 3 and 4 are collected in the report.
pub fn run_version_workflow(args: VersionWorkflowArgs, config: &Config) -> Result<VersionReport> {
    let src = match args.src {
        Some(src) => src,
        None => std::env::current_dir()?,
    };
    let root = src
        .canonicalize()
        .map_err(|source| PleasingError::FileRead { path: src, source })?;

    let manifest = locate_manifest(args.composer.as_deref(), &root, &config.version.manifest)
        .ok_or_else(|| {
            PleasingError::ManifestNotFound(args.composer.clone().unwrap_or_else(|| root.clone()))
        })?;

    let current_text = read_manifest_version(&manifest)?;
    let (current, dropped) = SemanticVersion::parse_with_dropped(&current_text)?;
    info!(manifest = %manifest.display(), current = %current, "current version");

    let mut warnings = Vec::new();
    if let Some(dropped) = dropped {
        warnings.push(VersionWarning::LossyVersion {
            input: current_text.clone(),
            dropped,
        });
    }

    let next = resolve(&current, &args.options, config.version.increment_policy())?;
    info!(next = %next, "new version");

    // A build tag sorts as a pre-release, so only numeric changes are compared
    let build_only = matches!(args.options.directive(), Some(VersionDirective::SetBuild(_)));
    if !build_only && next.precedence() <= current.precedence() {
        warnings.push(VersionWarning::NotAnUpgrade {
            from: current.to_string(),
            to: next.to_string(),
        });
    }

    let rewriter = TreeRewriter::from_config(&config.version).dry_run(args.dry_run);
    if rewriter.existing_folders(&root).is_empty() {
        warnings.push(VersionWarning::NoVersionedFolders { root: root.clone() });
    }

    let new_text = next.to_string();
    let files = rewriter.rewrite(&root, current.raw(), &new_text);

    let manifest_outcome = match rewrite_manifest(&manifest, current.raw(), &new_text, args.dry_run)
    {
        Ok(true) => FileOutcome::Updated,
        Ok(false) => FileOutcome::Failed(PleasingError::ManifestRewriteNotApplied(manifest.clone())),
        Err(err) => FileOutcome::Failed(err),
    };

    Ok(VersionReport {
        root,
        manifest,
        current,
        next,
        files,
        manifest_outcome,
        warnings,
        dry_run: args.dry_run,
    })
}
