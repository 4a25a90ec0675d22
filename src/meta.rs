//! Sidecar metadata and persistent identity
//!
//! Every scaffolded markup and stylesheet file is paired with a
//! `<name>.<ext>.meta` sidecar carrying the identity token the engine uses
//! to keep cross-asset references stable. The token is assigned on first
//! write and must survive regeneration, so extraction fails soft: a
//! corrupt or foreign sidecar yields no identity and a fresh one is
//! minted instead of blocking the operation.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// File-name suffix appended to the primary file name
pub const SIDECAR_SUFFIX: &str = "meta";

const FORMAT_LINE: &str = "fileFormatVersion: 2";
const IDENTITY_KEY: &str = "identity";
const IMPORTER_KEY: &str = "importer";

/// Mint a fresh identity token: 32 lowercase hex characters drawn from a
/// uniform random source. Collisions are treated as negligible and are
/// neither checked for nor recovered from.
pub fn mint_identity() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Sidecar path for a primary asset file (`Menu.uxml` -> `Menu.uxml.meta`)
pub fn sidecar_path(primary: &Path) -> PathBuf {
    let mut name = primary.as_os_str().to_os_string();
    name.push(".");
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Extract the identity from a sidecar body.
///
/// Returns `None` on any parse miss - no identity line, an empty value, or
/// a value containing whitespace - so a damaged sidecar never blocks
/// regeneration.
pub fn read_identity(body: &str) -> Option<String> {
    for line in body.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.trim() == IDENTITY_KEY {
            let value = value.trim();
            if value.is_empty() || value.contains(char::is_whitespace) {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

/// Render a fresh sidecar body embedding the identity and importer kind
pub fn render_sidecar(identity: &str, importer: &str) -> String {
    format!("{FORMAT_LINE}\n{IDENTITY_KEY}: {identity}\n{IMPORTER_KEY}: {importer}\n")
}

/// Rewrite an existing sidecar body, preserving unrecognized lines.
///
/// The identity and importer lines are replaced in place and appended when
/// missing; everything else is carried through untouched.
pub fn rewrite_sidecar(existing: &str, identity: &str, importer: &str) -> String {
    let mut lines = Vec::new();
    let mut saw_identity = false;
    let mut saw_importer = false;

    for line in existing.lines() {
        match line.split_once(':').map(|(key, _)| key.trim()) {
            Some(IDENTITY_KEY) => {
                lines.push(format!("{IDENTITY_KEY}: {identity}"));
                saw_identity = true;
            }
            Some(IMPORTER_KEY) => {
                lines.push(format!("{IMPORTER_KEY}: {importer}"));
                saw_importer = true;
            }
            _ => lines.push(line.to_string()),
        }
    }

    if !saw_identity {
        lines.push(format!("{IDENTITY_KEY}: {identity}"));
    }
    if !saw_importer {
        lines.push(format!("{IMPORTER_KEY}: {importer}"));
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}
