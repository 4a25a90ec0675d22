//! uiforge - UI Toolkit scaffolding tool
//!
//! uiforge synthesizes UXML markup, USS stylesheets and C# behavior
//! scripts - plus the `.meta` identity sidecars the engine expects - into
//! a fixed Unity project layout, from a small catalog of named template
//! variants. Regenerating an asset in place preserves the identity its
//! sidecar already carries, so engine references stay stable.

pub mod config;
pub mod error;
pub mod fs;
pub mod locator;
pub mod meta;
pub mod models;
pub mod project;
pub mod sanitize;
pub mod scaffold;
pub mod templates;

// Re-exports for convenience
pub use config::ForgeConfig;
pub use error::{ForgeError, ForgeResult};
pub use models::{AssetKind, GeneratedAsset, MarkupVariant, ScriptVariant, StyleVariant};
pub use project::ProjectContext;
pub use sanitize::sanitize;
pub use scaffold::UiScaffold;
pub use templates::{AssetNames, TemplateCatalog};
