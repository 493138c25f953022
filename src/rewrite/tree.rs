use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::comment::replace_in_comments;
use crate::config::VersionConfig;
use crate::error::{PleasingError, Result};

/// What happened to a single candidate file
#[derive(Debug)]
pub enum FileOutcome {
    /// At least one version literal was replaced
    Updated,
    /// No version literal was found; the file was not written
    Unchanged,
    /// Reading, walking or writing failed
    Failed(PleasingError),
}

#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a tree rewrite, in walk order
#[derive(Debug, Default)]
pub struct RewriteReport {
    pub files: Vec<FileResult>,
}

impl RewriteReport {
    fn with_outcome(&self, pick: fn(&FileOutcome) -> bool) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| pick(&f.outcome))
            .map(|f| f.path.as_path())
            .collect()
    }

    pub fn updated(&self) -> Vec<&Path> {
        self.with_outcome(|o| matches!(o, FileOutcome::Updated))
    }

    pub fn unchanged(&self) -> Vec<&Path> {
        self.with_outcome(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn failed(&self) -> Vec<&Path> {
        self.with_outcome(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed().is_empty()
    }
}

/// Decides which files carry a version literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    extensions: Vec<String>,
    basenames: Vec<String>,
}

impl FileFilter {
    pub fn new(extensions: Vec<String>, basenames: Vec<String>) -> Self {
        FileFilter {
            extensions,
            basenames,
        }
    }

    /// Whether the file has a versioned extension or basename
    pub fn matches(&self, path: &Path) -> bool {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        by_extension || self.is_named_file(path)
    }

    /// Whether the file is matched by basename (e.g. `bin/console`)
    pub fn is_named_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.basenames.iter().any(|b| b == name))
    }
}

/// Rewrites version literals in files under a fixed set of folders.
#[derive(Debug, Clone)]
pub struct TreeRewriter {
    folders: Vec<String>,
    filter: FileFilter,
    dry_run: bool,
}

impl TreeRewriter {
    pub fn new(folders: Vec<String>, filter: FileFilter) -> Self {
        TreeRewriter {
            folders,
            filter,
            dry_run: false,
        }
    }

    pub fn from_config(config: &VersionConfig) -> Self {
        TreeRewriter::new(
            config.folders.clone(),
            FileFilter::new(config.extensions.clone(), config.basenames.clone()),
        )
    }

    /// When set, files are scanned but never written
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Configured folders that exist as directories under `root`
    pub fn existing_folders(&self, root: &Path) -> Vec<PathBuf> {
        self.folders
            .iter()
            .map(|folder| root.join(folder))
            .filter(|folder| folder.is_dir())
            .collect()
    }

    /// Walks every existing folder under `root` and rewrites `old` to `new`
    /// in each candidate file.
    ///
    /// Symlinks are followed, so a linked file is rewritten in place of its
    /// target; a link loop is recorded as a failure. Failures are recorded
    /// per file and the walk always runs to completion.
    pub fn rewrite(&self, root: &Path, old: &str, new: &str) -> RewriteReport {
        let mut report = RewriteReport::default();

        for folder in self.existing_folders(root) {
            debug!(folder = %folder.display(), "scanning folder");

            for entry in WalkDir::new(&folder).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        let path = err
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| folder.clone());
                        warn!(path = %path.display(), error = %err, "cannot walk path");
                        report.files.push(FileResult {
                            outcome: FileOutcome::Failed(PleasingError::FileRead {
                                path: path.clone(),
                                source: io::Error::from(err),
                            }),
                            path,
                        });
                        continue;
                    }
                };

                if !entry.file_type().is_file() || !self.filter.matches(entry.path()) {
                    continue;
                }

                let path = entry.into_path();
                let outcome = match self.rewrite_file(&path, old, new) {
                    Ok(true) => FileOutcome::Updated,
                    Ok(false) => FileOutcome::Unchanged,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "failed to update file");
                        FileOutcome::Failed(err)
                    }
                };
                report.files.push(FileResult { path, outcome });
            }
        }

        info!(
            updated = report.updated().len(),
            unchanged = report.unchanged().len(),
            failed = report.failed().len(),
            "tree rewrite finished"
        );
        report
    }

    /// Rewrites one file. Returns whether anything was replaced.
    ///
    /// Version literals are replaced inside block comments. A file matched
    /// by basename that has no block comment gets its quoted `'v{old}'`
    /// literal replaced instead.
    pub fn rewrite_file(&self, path: &Path, old: &str, new: &str) -> Result<bool> {
        let contents = fs::read_to_string(path).map_err(|source| PleasingError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let (rewritten, replaced) = match replace_in_comments(&contents, old, new) {
            Some(result) => result,
            None if self.filter.is_named_file(path) => {
                let quoted_old = format!("'v{}'", old);
                let count = contents.matches(&quoted_old).count();
                (contents.replace(&quoted_old, &format!("'v{}'", new)), count)
            }
            None => (contents, 0),
        };

        if replaced == 0 {
            debug!(path = %path.display(), "no version literal found");
            return Ok(false);
        }

        debug!(path = %path.display(), replaced, dry_run = self.dry_run, "version literal replaced");
        if !self.dry_run {
            fs::write(path, rewritten).map_err(|source| PleasingError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(true)
    }
}
