//! Scaffolding orchestrator
//!
//! Each operation is a short-lived transaction over the filesystem: the
//! project subtree is the sole source of truth and is re-scanned on every
//! locate. The primary file is written before its sidecar, the pair is
//! not transactional, and partial component failures are reported without
//! rolling back files already written.

use std::path::{Path, PathBuf};

use crate::error::{ForgeError, ForgeResult};
use crate::fs;
use crate::locator;
use crate::meta;
use crate::models::{AssetKind, GeneratedAsset};
use crate::project::ProjectContext;
use crate::sanitize::sanitize;
use crate::templates::{AssetNames, TemplateCatalog};

/// Directory for standalone markup, relative to the assets root
const MARKUP_DIR: &str = "UI";
/// Directory for standalone stylesheets, relative to the assets root
const STYLES_DIR: &str = "UI/Styles";
/// Directory for components, relative to the assets root
const COMPONENTS_DIR: &str = "UI/Components";

/// Report returned when a listing finds nothing
const EMPTY_LISTING: &str = "no UI documents found";

/// Scaffolding service over one project
pub struct UiScaffold {
    project: ProjectContext,
    catalog: TemplateCatalog,
}

impl UiScaffold {
    pub fn new(project: ProjectContext) -> Self {
        Self {
            project,
            catalog: TemplateCatalog::new(),
        }
    }

    pub fn project(&self) -> &ProjectContext {
        &self.project
    }

    /// Create one asset from a template variant.
    pub fn create(
        &self,
        kind: AssetKind,
        name: &str,
        variant: &str,
        custom: Option<&str>,
    ) -> ForgeResult<String> {
        let stem = sanitize(kind, name)?;
        // A script's file stem must match its type name
        let stem = match kind {
            AssetKind::BehaviorScript => AssetNames::derive(&stem).pascal,
            _ => stem,
        };
        let dir = self.target_dir(kind);
        let asset = self.create_in(&dir, kind, &stem, variant, custom)?;
        Ok(format!(
            "created {} ({}, '{}' variant)",
            asset.relative_path.display(),
            kind.label(),
            asset.variant
        ))
    }

    /// Overwrite an existing markup document, preserving its identity.
    ///
    /// The new body is written verbatim; no re-templating happens here.
    pub fn update(&self, name: &str, new_body: &str) -> ForgeResult<String> {
        let kind = AssetKind::Markup;
        let stem = sanitize(kind, name)?;
        let Some(target) = locator::find(self.project.assets_path(), &stem, kind.extension())
        else {
            return Err(ForgeError::NotFound { name: stem });
        };

        let sidecar = meta::sidecar_path(&target);
        let sidecar_body = match fs::read_to_string(&sidecar) {
            Ok(existing) => {
                let identity = meta::read_identity(&existing).unwrap_or_else(meta::mint_identity);
                meta::rewrite_sidecar(&existing, &identity, kind.importer())
            }
            Err(_) => meta::render_sidecar(&meta::mint_identity(), kind.importer()),
        };

        fs::write_atomic(&target, new_body)?;
        fs::write_atomic(&sidecar, &sidecar_body)?;

        Ok(format!(
            "updated {}",
            self.project.display_path(&target).display()
        ))
    }

    /// Return the raw content of an existing markup document.
    pub fn read(&self, name: &str) -> ForgeResult<String> {
        let kind = AssetKind::Markup;
        let stem = sanitize(kind, name)?;
        let Some(target) = locator::find(self.project.assets_path(), &stem, kind.extension())
        else {
            return Err(ForgeError::NotFound { name: stem });
        };
        fs::read_to_string(&target)
    }

    /// Newline-joined inventory of every markup document under the assets
    /// root, relative to it, in discovery order.
    pub fn list_all(&self) -> String {
        let paths = locator::list_all(self.project.assets_path(), AssetKind::Markup.extension());
        if paths.is_empty() {
            return EMPTY_LISTING.to_string();
        }
        paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create a coordinated markup + stylesheet + script component.
    ///
    /// All three files share one subfolder and one sanitized name, so the
    /// markup root id, stylesheet selectors and script type name line up.
    /// A failing create surfaces immediately; files already written stay.
    pub fn create_component(&self, name: &str, variant: &str) -> ForgeResult<String> {
        let stem = sanitize(AssetKind::Markup, name)?;
        let names = AssetNames::derive(&stem);
        let dir = self
            .project
            .assets_path()
            .join(COMPONENTS_DIR)
            .join(&names.pascal);

        let mut lines = Vec::new();
        for kind in [
            AssetKind::Markup,
            AssetKind::Stylesheet,
            AssetKind::BehaviorScript,
        ] {
            let asset = self.create_in(&dir, kind, &names.pascal, variant, None)?;
            lines.push(format!(
                "created {} ({})",
                asset.relative_path.display(),
                kind.label()
            ));
        }
        Ok(lines.join("\n"))
    }

    fn target_dir(&self, kind: AssetKind) -> PathBuf {
        match kind {
            AssetKind::Markup => self.project.assets_path().join(MARKUP_DIR),
            AssetKind::Stylesheet => self.project.assets_path().join(STYLES_DIR),
            AssetKind::BehaviorScript => self.project.scripts_path().to_path_buf(),
        }
    }

    /// Render one asset and write it (plus its sidecar) into `dir`.
    ///
    /// An identity already recorded next to the target is reused; one is
    /// minted only when no readable sidecar exists.
    fn create_in(
        &self,
        dir: &Path,
        kind: AssetKind,
        stem: &str,
        variant: &str,
        custom: Option<&str>,
    ) -> ForgeResult<GeneratedAsset> {
        let body = self.catalog.render(kind, variant, stem, custom)?;
        let target = dir.join(format!("{stem}.{}", kind.extension()));
        self.project.ensure_within_assets(&target)?;

        fs::ensure_dir(dir)?;
        fs::write_atomic(&target, &body)?;

        if kind.writes_sidecar() {
            let sidecar = meta::sidecar_path(&target);
            let sidecar_body = match fs::read_to_string(&sidecar) {
                Ok(existing) => {
                    let identity =
                        meta::read_identity(&existing).unwrap_or_else(meta::mint_identity);
                    meta::rewrite_sidecar(&existing, &identity, kind.importer())
                }
                Err(_) => meta::render_sidecar(&meta::mint_identity(), kind.importer()),
            };
            fs::write_atomic(&sidecar, &sidecar_body)?;
        }

        Ok(GeneratedAsset {
            stem: stem.to_string(),
            kind,
            variant: variant.to_string(),
            body,
            relative_path: self.project.display_path(&target),
        })
    }
}
