//! Locating the package manifest and reading the current version from it.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{PleasingError, Result};

/// Finds the package manifest.
///
/// An explicit path is used as given and yields `None` when it does not
/// exist. Otherwise `search_root/<file_name>` is tried, then, if the search
/// root has a `src` component, the manifest inside and beside the last
/// `src` directory.
///
/// # Example
/// ```ignore
/// // /work/pkg/src/lib with /work/pkg/composer.json on disk
/// let found = locate_manifest(None, Path::new("/work/pkg/src/lib"), "composer.json");
/// assert_eq!(found, Some(PathBuf::from("/work/pkg/composer.json")));
/// ```
pub fn locate_manifest(
    explicit: Option<&Path>,
    search_root: &Path,
    file_name: &str,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit manifest path");
        return path.is_file().then(|| path.to_path_buf());
    }

    let direct = search_root.join(file_name);
    if direct.is_file() {
        return Some(direct);
    }

    let mut prefix = PathBuf::new();
    let mut src_dir: Option<(PathBuf, PathBuf)> = None;
    for component in search_root.components() {
        let parent = prefix.clone();
        prefix.push(component.as_os_str());
        if matches!(component, Component::Normal(name) if name == "src") {
            src_dir = Some((prefix.clone(), parent));
        }
    }

    let (src, parent) = src_dir?;
    [src.join(file_name), parent.join(file_name)]
        .into_iter()
        .inspect(|candidate| debug!(candidate = %candidate.display(), "checking manifest candidate"))
        .find(|candidate| candidate.is_file())
}

/// Reads the top-level `version` string from a JSON manifest.
pub fn read_manifest_version(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .map_err(|e| PleasingError::manifest_unreadable(path, e.to_string()))?;
    let json: Value = serde_json::from_str(&text)
        .map_err(|e| PleasingError::manifest_unreadable(path, format!("invalid JSON: {}", e)))?;

    match json.get("version") {
        Some(Value::String(version)) if !version.trim().is_empty() => Ok(version.clone()),
        Some(Value::String(_)) => Err(PleasingError::manifest_unreadable(
            path,
            "version field is empty",
        )),
        Some(_) => Err(PleasingError::manifest_unreadable(
            path,
            "version field is not a string",
        )),
        None => Err(PleasingError::manifest_unreadable(
            path,
            "no version field",
        )),
    }
}
