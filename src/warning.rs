use std::fmt;
use std::path::PathBuf;

/// Non-fatal issues noticed while computing or applying a new version.
/// These are reported to the user but never stop a run.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionWarning {
    /// Part of the version string cannot be represented and was dropped
    LossyVersion { input: String, dropped: String },
    /// The new version does not sort after the current one
    NotAnUpgrade { from: String, to: String },
    /// None of the versioned folders exist under the source path
    NoVersionedFolders { root: PathBuf },
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionWarning::LossyVersion { input, dropped } => {
                write!(f, "Version '{}' loses '{}' when rewritten", input, dropped)
            }
            VersionWarning::NotAnUpgrade { from, to } => {
                write!(f, "New version {} is not greater than current version {}", to, from)
            }
            VersionWarning::NoVersionedFolders { root } => {
                write!(f, "No versioned folders found under {}", root.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossy_display() {
        let warning = VersionWarning::LossyVersion {
            input: "1.0.0-beta.1".to_string(),
            dropped: "-beta1".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("1.0.0-beta.1"));
        assert!(msg.contains("-beta1"));
    }

    #[test]
    fn test_not_an_upgrade_display() {
        let warning = VersionWarning::NotAnUpgrade {
            from: "2.0.0".to_string(),
            to: "1.9.0".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "New version 1.9.0 is not greater than current version 2.0.0"
        );
    }

    #[test]
    fn test_no_folders_display() {
        let warning = VersionWarning::NoVersionedFolders {
            root: PathBuf::from("/work/pkg"),
        };
        assert!(warning.to_string().contains("/work/pkg"));
    }
}
