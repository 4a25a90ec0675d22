//! Error types for uiforge
//!
//! Uses `thiserror` for library errors; the CLI binary wraps them in
//! `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for uiforge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Main error type for uiforge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// No project root could be resolved
    #[error("no project set - pass --project or run inside a project directory")]
    ProjectNotSet,

    /// Empty or malformed caller input
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Asset could not be located under the assets root
    #[error("asset '{name}' not found under the assets directory")]
    NotFound { name: String },

    /// Path escapes the assets boundary (security issue)
    #[error("path '{path}' escapes assets boundary '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Wrapped I/O failure from the host filesystem
    #[error("file operation failed on {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template rendering failure
    #[error("template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Project config parsing failure
    #[error("invalid project config: {0}")]
    Config(#[from] toml::de::Error),
}

impl ForgeError {
    /// Wrap an I/O error together with the path it occurred on
    pub fn file_op(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }

    /// Shorthand for an `InvalidParameter` error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
