//! Project configuration
//!
//! An optional `uiforge.toml` at the project root overrides the default
//! asset and script directories:
//!
//! ```toml
//! assets-dir = "Content"
//! scripts-dir = "Code"
//! ```
//!
//! A missing file means built-in defaults; a present but malformed file is
//! an error, never a silent fallback.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

/// Name of the optional per-project config file
pub const CONFIG_FILE: &str = "uiforge.toml";

/// Per-project directory layout overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Assets directory, relative to the project root
    #[serde(default = "default_assets_dir", rename = "assets-dir")]
    pub assets_dir: String,

    /// Behavior script directory, relative to the assets directory
    #[serde(default = "default_scripts_dir", rename = "scripts-dir")]
    pub scripts_dir: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            scripts_dir: default_scripts_dir(),
        }
    }
}

fn default_assets_dir() -> String {
    "Assets".to_string()
}

fn default_scripts_dir() -> String {
    "Scripts".to_string()
}

impl ForgeConfig {
    /// Load the project config, falling back to defaults when absent
    pub fn load(project_root: &Path) -> ForgeResult<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| ForgeError::file_op(&path, e))?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = ForgeConfig::load(dir.path()).unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.assets_dir, "Assets");
        assert_eq!(config.scripts_dir, "Scripts");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "assets-dir = \"Content\"\n").unwrap();

        let config = ForgeConfig::load(dir.path()).unwrap();
        assert_eq!(config.assets_dir, "Content");
        assert_eq!(config.scripts_dir, "Scripts");
    }

    #[test]
    fn test_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "assets-dir = \"Content\"\nscripts-dir = \"Code\"\n",
        )
        .unwrap();

        let config = ForgeConfig::load(dir.path()).unwrap();
        assert_eq!(config.assets_dir, "Content");
        assert_eq!(config.scripts_dir, "Code");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "assets-dir = [not toml").unwrap();

        let result = ForgeConfig::load(dir.path());
        assert!(matches!(result, Err(ForgeError::Config(_))));
    }
}
