use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::IncrementPolicy;
use crate::error::{PleasingError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "pleasing.toml";

/// Represents the complete configuration for pleasing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,
}

/// Returns the default folders searched for versioned files.
fn default_folders() -> Vec<String> {
    ["dist", "js", "less", "css", "src", "scss", "bin"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Returns the default extensions of versioned files.
fn default_extensions() -> Vec<String> {
    ["js", "less", "css", "php"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Returns the default basenames versioned regardless of extension.
fn default_basenames() -> Vec<String> {
    vec!["console".to_string()]
}

fn default_manifest() -> String {
    "composer.json".to_string()
}

/// Configuration for the `version` command.
///
/// Controls which files are rewritten, where the manifest is found, and how
/// numeric increments treat lower components.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_folders")]
    pub folders: Vec<String>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_basenames")]
    pub basenames: Vec<String>,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub cascade_reset: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            folders: default_folders(),
            extensions: default_extensions(),
            basenames: default_basenames(),
            manifest: default_manifest(),
            cascade_reset: false,
        }
    }
}

impl VersionConfig {
    pub fn increment_policy(&self) -> IncrementPolicy {
        IncrementPolicy {
            cascade_reset: self.cascade_reset,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.manifest.trim().is_empty() {
            return Err(PleasingError::config("version.manifest must not be empty"));
        }
        if let Some(folder) = self
            .folders
            .iter()
            .find(|f| f.is_empty() || Path::new(f).is_absolute())
        {
            return Err(PleasingError::config(format!(
                "version.folders entry '{}' must be a relative folder name",
                folder
            )));
        }
        Ok(())
    }
}

/// Parses configuration text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(text).map_err(|e| PleasingError::config(e.to_string()))?;
    config.version.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pleasing.toml` in current directory
/// 3. `.pleasing.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|e| {
            PleasingError::config(format!("cannot read {}: {}", path.display(), e))
        })
    };

    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        read(Path::new(CONFIG_FILE_NAME))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
