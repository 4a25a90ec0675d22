//! Shared helpers for integration tests
#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use uiforge::{ProjectContext, UiScaffold};

/// Fresh temp project with the default layout
pub fn project() -> (TempDir, UiScaffold) {
    let dir = TempDir::new().unwrap();
    let scaffold = UiScaffold::new(ProjectContext::new(dir.path()));
    (dir, scaffold)
}

/// Read a file under the project root
pub fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

/// Identity recorded in a sidecar under the project root
pub fn identity_of(root: &Path, relative: &str) -> String {
    uiforge::meta::read_identity(&read(root, relative)).unwrap()
}
