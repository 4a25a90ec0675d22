//! Filesystem helpers
//!
//! Writes go through tempfile-then-rename so a crashed write never leaves
//! a half-written asset behind. Concurrent writers race last-writer-wins;
//! there is no cross-process locking and no retry.

use std::io::Write;
use std::path::Path;

use crate::error::{ForgeError, ForgeResult};

/// Read a file into a string
pub fn read_to_string(path: &Path) -> ForgeResult<String> {
    std::fs::read_to_string(path).map_err(|e| ForgeError::file_op(path, e))
}

/// Create a directory and all parents. Succeeds when it already exists.
pub fn ensure_dir(path: &Path) -> ForgeResult<()> {
    std::fs::create_dir_all(path).map_err(|e| ForgeError::file_op(path, e))
}

/// Write content atomically via a temporary file in the target directory
pub fn write_atomic(path: &Path, content: &str) -> ForgeResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| ForgeError::file_op(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| ForgeError::file_op(path, e))?;
    tmp.persist(path)
        .map_err(|e| ForgeError::file_op(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.uxml");

        write_atomic(&path, "<ui:UXML />").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "<ui:UXML />");
    }

    #[test]
    fn write_atomic_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.uxml");

        std::fs::write(&path, "original").unwrap();
        write_atomic(&path, "replaced").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "replaced");
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.uxml");

        write_atomic(&path, "body").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn read_missing_file_is_a_file_operation_error() {
        let dir = tempdir().unwrap();
        let result = read_to_string(&dir.path().join("absent.uxml"));
        assert!(matches!(result, Err(ForgeError::FileOperation { .. })));
    }
}
