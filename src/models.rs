//! Core data models for uiforge
//!
//! Defines the fundamental types threaded through scaffolding:
//! - `AssetKind`: the three primary asset families and their file facts
//! - Per-kind template variants with explicit base fallbacks
//! - `GeneratedAsset`: a rendered body paired with its target path

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of UI asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// UXML document markup
    Markup,
    /// USS stylesheet
    Stylesheet,
    /// C# behavior script backing a document
    BehaviorScript,
}

impl AssetKind {
    /// File extension written for this kind, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Markup => "uxml",
            AssetKind::Stylesheet => "uss",
            AssetKind::BehaviorScript => "cs",
        }
    }

    /// Importer tag recorded in the sidecar for this kind
    pub fn importer(self) -> &'static str {
        match self {
            AssetKind::Markup => "VisualTreeImporter",
            AssetKind::Stylesheet => "StyleSheetImporter",
            AssetKind::BehaviorScript => "MonoImporter",
        }
    }

    /// Whether scaffolding pairs this kind with a sidecar.
    ///
    /// Behavior scripts are left to the engine's own script importer, which
    /// assigns their identity on first import.
    pub fn writes_sidecar(self) -> bool {
        !matches!(self, AssetKind::BehaviorScript)
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Markup => "markup",
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::BehaviorScript => "behavior script",
        }
    }
}

/// Markup document template shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupVariant {
    Window,
    Document,
    Panel,
    Form,
    Modal,
    Custom,
}

impl MarkupVariant {
    /// Parse a variant tag. Unknown tags resolve to the document skeleton.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "window" => Self::Window,
            "panel" => Self::Panel,
            "form" => Self::Form,
            "modal" => Self::Modal,
            "custom" => Self::Custom,
            _ => Self::Document,
        }
    }
}

/// Stylesheet template shapes
///
/// The structural tags (`window`, `panel`, `form`, `modal`) mirror the
/// markup shapes so a component's stylesheet render stays selector-coherent
/// with its paired markup render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleVariant {
    Theme,
    Utilities,
    Window,
    Panel,
    Form,
    Modal,
    Component,
    Custom,
}

impl StyleVariant {
    /// Parse a variant tag. Unknown tags resolve to the component skeleton.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "theme" => Self::Theme,
            "utilities" => Self::Utilities,
            "window" => Self::Window,
            "panel" => Self::Panel,
            "form" => Self::Form,
            "modal" => Self::Modal,
            "custom" => Self::Custom,
            _ => Self::Component,
        }
    }
}

/// Behavior script template shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVariant {
    Window,
    Form,
    Modal,
    Controller,
    Custom,
}

impl ScriptVariant {
    /// Parse a variant tag. Unknown tags resolve to the controller skeleton.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "window" => Self::Window,
            "form" => Self::Form,
            "modal" => Self::Modal,
            "custom" => Self::Custom,
            _ => Self::Controller,
        }
    }
}

/// A rendered asset ready to be written, then discarded
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAsset {
    /// Sanitized file stem
    pub stem: String,

    /// Asset family the body belongs to
    pub kind: AssetKind,

    /// Variant tag the body was rendered from, as supplied by the caller
    pub variant: String,

    /// Rendered file body
    pub body: String,

    /// Target path relative to the project root
    pub relative_path: PathBuf,
}
