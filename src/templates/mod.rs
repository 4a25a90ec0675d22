//! Template catalog
//!
//! A fixed set of skeletons per (asset kind, variant), interpolated with
//! name forms derived from the sanitized logical stem. Rendering is pure:
//! identical inputs always produce byte-identical output, and the `custom`
//! variant returns the caller's body verbatim.

mod behavior;
mod markup;
mod stylesheet;

use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde_json::json;

use crate::error::{ForgeError, ForgeResult};
use crate::models::{AssetKind, MarkupVariant, ScriptVariant, StyleVariant};

/// Name forms threaded through every skeleton.
///
/// All three derive from one sanitized stem so the markup root id, the
/// stylesheet selectors and the script type name line up for a component
/// without manual edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNames {
    /// PascalCase type/file name, e.g. `MainMenu`
    pub pascal: String,
    /// kebab-case element/selector stem, e.g. `main-menu`
    pub element: String,
    /// Title Case display text, e.g. `Main Menu`
    pub title: String,
}

impl AssetNames {
    pub fn derive(stem: &str) -> Self {
        Self {
            pascal: stem.to_case(Case::Pascal),
            element: stem.to_case(Case::Kebab),
            title: stem.to_case(Case::Title),
        }
    }
}

/// Renders catalog skeletons
pub struct TemplateCatalog {
    handlebars: Handlebars<'static>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        // Generated bodies are markup and code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render the body for one asset.
    ///
    /// The `custom` variant requires a non-empty caller-supplied body and
    /// returns it untouched. Every other tag selects a fixed skeleton for
    /// the kind, with unknown tags resolving to the kind's base skeleton.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the `custom` variant is requested
    /// without a body.
    pub fn render(
        &self,
        kind: AssetKind,
        variant: &str,
        stem: &str,
        custom: Option<&str>,
    ) -> ForgeResult<String> {
        let skeleton = match kind {
            AssetKind::Markup => match MarkupVariant::from_tag(variant) {
                MarkupVariant::Custom => return custom_body(custom),
                shape => markup::skeleton(shape),
            },
            AssetKind::Stylesheet => match StyleVariant::from_tag(variant) {
                StyleVariant::Custom => return custom_body(custom),
                shape => stylesheet::skeleton(shape),
            },
            AssetKind::BehaviorScript => match ScriptVariant::from_tag(variant) {
                ScriptVariant::Custom => return custom_body(custom),
                shape => behavior::skeleton(shape),
            },
        };

        let names = AssetNames::derive(stem);
        let context = json!({
            "name": names.pascal,
            "element": names.element,
            "title": names.title,
        });
        Ok(self.handlebars.render_template(skeleton, &context)?)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn custom_body(custom: Option<&str>) -> ForgeResult<String> {
    match custom {
        Some(body) if !body.trim().is_empty() => Ok(body.to_string()),
        _ => Err(ForgeError::invalid(
            "the custom variant requires a non-empty body",
        )),
    }
}
