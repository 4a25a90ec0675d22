//! Project context
//!
//! A `ProjectContext` is built once by the shell and handed to the
//! scaffolding service; there is no process-wide "current project". Every
//! generated or located path is computed under the assets directory and
//! checked against it before any write.

use std::path::{Component, Path, PathBuf};

use crate::config::ForgeConfig;
use crate::error::{ForgeError, ForgeResult};

/// Immutable project layout for one scaffolding session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    assets_path: PathBuf,
    scripts_path: PathBuf,
}

impl ProjectContext {
    /// Build a context from a project root using the default layout
    /// (`Assets/` and `Assets/Scripts/`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &ForgeConfig::default())
    }

    /// Build a context from a project root and a loaded config
    pub fn with_config(root: impl Into<PathBuf>, config: &ForgeConfig) -> Self {
        let root = root.into();
        let assets_path = root.join(&config.assets_dir);
        let scripts_path = assets_path.join(&config.scripts_dir);
        Self {
            root,
            assets_path,
            scripts_path,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_path(&self) -> &Path {
        &self.assets_path
    }

    pub fn scripts_path(&self) -> &Path {
        &self.scripts_path
    }

    /// Path relative to the project root, for reports
    pub fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Reject any computed path that is not a descendant of the assets root.
    ///
    /// The sanitizer already strips traversal constructs out of logical
    /// names; this guards the joined result as well.
    pub fn ensure_within_assets(&self, candidate: &Path) -> ForgeResult<()> {
        let escaped = !candidate.starts_with(&self.assets_path)
            || candidate
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escaped {
            return Err(ForgeError::PathEscape {
                path: candidate.to_path_buf(),
                root: self.assets_path.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let project = ProjectContext::new("/work/Game");
        assert_eq!(project.root(), Path::new("/work/Game"));
        assert_eq!(project.assets_path(), Path::new("/work/Game/Assets"));
        assert_eq!(project.scripts_path(), Path::new("/work/Game/Assets/Scripts"));
    }

    #[test]
    fn test_config_overrides_layout() {
        let config = ForgeConfig {
            assets_dir: "Content".to_string(),
            scripts_dir: "Code".to_string(),
        };
        let project = ProjectContext::with_config("/work/Game", &config);
        assert_eq!(project.assets_path(), Path::new("/work/Game/Content"));
        assert_eq!(project.scripts_path(), Path::new("/work/Game/Content/Code"));
    }

    #[test]
    fn test_display_path_strips_root() {
        let project = ProjectContext::new("/work/Game");
        let inside = Path::new("/work/Game/Assets/UI/Menu.uxml");
        assert_eq!(project.display_path(inside), Path::new("Assets/UI/Menu.uxml"));

        let outside = Path::new("/elsewhere/Menu.uxml");
        assert_eq!(project.display_path(outside), outside);
    }

    #[test]
    fn test_ensure_within_assets_accepts_descendants() {
        let project = ProjectContext::new("/work/Game");
        let path = Path::new("/work/Game/Assets/UI/Components/Menu/Menu.uxml");
        assert!(project.ensure_within_assets(path).is_ok());
    }

    #[test]
    fn test_ensure_within_assets_rejects_outsiders() {
        let project = ProjectContext::new("/work/Game");

        let result = project.ensure_within_assets(Path::new("/etc/passwd"));
        assert!(matches!(result, Err(ForgeError::PathEscape { .. })));

        let sneaky = Path::new("/work/Game/Assets/UI/../../secrets.txt");
        let result = project.ensure_within_assets(sneaky);
        assert!(matches!(result, Err(ForgeError::PathEscape { .. })));
    }
}
