use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for pleasing operations
#[derive(Error, Debug)]
pub enum PleasingError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Could not find a manifest (searched from {})", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Could not read current version from {}: {reason}", .path.display())]
    ManifestUnreadable { path: PathBuf, reason: String },

    #[error("Could not determine new version: no --set, --major, --minor, --patch or --build given")]
    NoDirectiveGiven,

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version literal not found in manifest {}", .0.display())]
    ManifestRewriteNotApplied(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pleasing
pub type Result<T> = std::result::Result<T, PleasingError>;

impl PleasingError {
    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        PleasingError::InvalidVersionFormat(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PleasingError::Config(msg.into())
    }

    pub fn manifest_unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PleasingError::ManifestUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error aborts the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PleasingError::FileRead { .. }
                | PleasingError::FileWrite { .. }
                | PleasingError::ManifestRewriteNotApplied(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PleasingError::config("bad folders");
        assert_eq!(err.to_string(), "Configuration error: bad folders");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PleasingError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_version_message() {
        let err = PleasingError::invalid_version("'abc'");
        assert_eq!(err.to_string(), "Invalid version format: 'abc'");
    }

    #[test]
    fn test_file_errors_include_path() {
        let err = PleasingError::FileWrite {
            path: PathBuf::from("js/app.js"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("js/app.js"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_manifest_errors_include_path() {
        let err = PleasingError::manifest_unreadable("/tmp/composer.json", "missing version");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/composer.json"));
        assert!(msg.contains("missing version"));

        let err = PleasingError::ManifestNotFound(PathBuf::from("/work/src/lib"));
        assert!(err.to_string().contains("/work/src/lib"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(PleasingError::NoDirectiveGiven.is_fatal());
        assert!(PleasingError::invalid_version("x").is_fatal());
        assert!(!PleasingError::ManifestRewriteNotApplied(PathBuf::from("composer.json")).is_fatal());
        assert!(!PleasingError::FileRead {
            path: PathBuf::from("a.js"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        }
        .is_fatal());
    }
}
