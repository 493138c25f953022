use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PleasingError, Result};

fn version_field(version: &str) -> String {
    format!("\"version\": \"{}\",", version)
}

/// Replaces the manifest's `"version": "{old}",` field text with the new
/// version.
///
/// This is a textual substitution so formatting elsewhere in the file is
/// preserved. Returns `Ok(false)` without writing when the old field text
/// does not appear verbatim.
pub fn rewrite_manifest(path: &Path, old: &str, new: &str, dry_run: bool) -> Result<bool> {
    let contents = fs::read_to_string(path).map_err(|source| PleasingError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let old_field = version_field(old);
    let count = contents.matches(&old_field).count();
    debug!(path = %path.display(), count, "manifest version field matches");
    if count == 0 {
        return Ok(false);
    }

    if !dry_run {
        let rewritten = contents.replace(&old_field, &version_field(new));
        fs::write(path, rewritten).map_err(|source| PleasingError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = "{\n    \"name\": \"acme/pkg\",\n    \"version\": \"1.2.3\",\n    \"require\": {\n        \"php\": \">=7.1\"\n    }\n}\n";

    #[test]
    fn test_rewrite_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("composer.json");
        fs::write(&path, MANIFEST).unwrap();

        assert!(rewrite_manifest(&path, "1.2.3", "1.2.4", false).unwrap());
        let updated = fs::read_to_string(&path).unwrap();
        assert_eq!(updated, MANIFEST.replace("1.2.3", "1.2.4"));
        assert_eq!(updated.matches("\"version\": \"1.2.4\",").count(), 1);
    }

    #[test]
    fn test_literal_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("composer.json");
        fs::write(&path, MANIFEST).unwrap();

        assert!(!rewrite_manifest(&path, "9.9.9", "9.9.10", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
    }

    #[test]
    fn test_requires_exact_field_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("composer.json");
        let compact = "{\"version\":\"1.2.3\",\"name\":\"acme/pkg\"}";
        fs::write(&path, compact).unwrap();

        assert!(!rewrite_manifest(&path, "1.2.3", "1.2.4", false).unwrap());
    }

    #[test]
    fn test_dry_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("composer.json");
        fs::write(&path, MANIFEST).unwrap();

        assert!(rewrite_manifest(&path, "1.2.3", "2.0.0", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = rewrite_manifest(&dir.path().join("composer.json"), "1.0.0", "1.0.1", false)
            .unwrap_err();
        assert!(matches!(err, PleasingError::FileRead { .. }));
    }
}
