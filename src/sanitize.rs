//! Logical name sanitization
//!
//! Callers paste anything: bare names, names with a redundant extension,
//! or whole paths copied out of an editor. Sanitization is forgiving -
//! suspicious input is reduced to a usable stem instead of rejected -
//! while guaranteeing the stem cannot resolve outside the assets
//! directory once joined to its target folder. Only input that leaves no
//! usable stem at all is an error.

use crate::error::{ForgeError, ForgeResult};
use crate::models::AssetKind;

/// Normalize a user-supplied logical name into a safe file stem.
///
/// Strips a redundant `.<ext>` suffix matching the asset kind, keeps only
/// the final meaningful component of a pasted path (dropping separators,
/// parent segments and drive prefixes), and fails with `InvalidParameter`
/// when nothing usable remains. Sanitizing an already-clean stem returns
/// it unchanged.
pub fn sanitize(kind: AssetKind, name: &str) -> ForgeResult<String> {
    if name.trim().is_empty() {
        return Err(ForgeError::invalid("asset name must not be empty"));
    }

    // Final meaningful path component of a pasted path
    let component = name
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .last()
        .unwrap_or("");

    // Drive or scheme prefix left inside a single component ("C:Menu")
    let component = match component.rfind(':') {
        Some(idx) => &component[idx + 1..],
        None => component,
    };

    let suffix = format!(".{}", kind.extension());
    let mut stem = component.to_string();
    // Fixpoint: dot-trimming and extension-stripping feed each other
    loop {
        let before = stem.clone();
        stem = stem.trim().trim_matches('.').to_string();
        if stem.len() > suffix.len() && stem.to_ascii_lowercase().ends_with(&suffix) {
            stem.truncate(stem.len() - suffix.len());
        }
        if stem == before {
            break;
        }
    }

    if stem.is_empty() {
        return Err(ForgeError::invalid(format!(
            "asset name '{name}' leaves no usable file stem"
        )));
    }
    Ok(stem)
}
