//! Asset locator
//!
//! Resolves bare logical names to concrete paths by walking the assets
//! subtree. The walk is lazy and iterative, so deep trees cost no call
//! stack, and a missing root yields no matches rather than an error. The
//! tree is re-scanned on every call; no index is kept between operations.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lazily iterate every file under `root` carrying the given extension,
/// in depth-first discovery order.
pub fn matches<'a>(root: &Path, extension: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(move |entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == extension)
        })
        .map(|entry| entry.into_path())
}

/// Find the first file named `<stem>.<extension>` anywhere under `root`.
///
/// Matches are taken in directory-entry order as encountered; when several
/// files share a stem in different subdirectories the first one discovered
/// wins, which is not guaranteed stable across filesystems. Returns `None`
/// when the subtree is missing or holds no match.
pub fn find(root: &Path, stem: &str, extension: &str) -> Option<PathBuf> {
    matches(root, extension).find(|path| path.file_stem().is_some_and(|s| s == stem))
}

/// Every file carrying the extension under `root`, as paths relative to
/// `root`, in depth-first discovery order.
pub fn list_all(root: &Path, extension: &str) -> Vec<PathBuf> {
    matches(root, extension)
        .map(|path| {
            path.strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or(path)
        })
        .collect()
}
