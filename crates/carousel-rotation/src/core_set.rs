//! Protected core names.
//!
//! Every direct child of the core root is permanently excluded from
//! rotation, whatever its kind. The set is read fresh each pass and never
//! written by this engine.

use std::collections::HashSet;
use std::path::Path;

use crate::errors::{Result, RotationError};

/// Load the names of the protected core collection.
///
/// A missing core root is first-time setup, not an error: it yields the
/// empty set. Any other listing failure aborts the pass.
pub fn load_core_names(root: &Path) -> Result<HashSet<String>> {
    let entries = match std::fs::read_dir(root) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(source) => {
            return Err(RotationError::CoreRoot {
                path: root.to_path_buf(),
                source,
            });
        }
    };

    let mut names = HashSet::new();
    for entry in entries.flatten() {
        let _ = names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_empty_set() {
        let dir = TempDir::new().unwrap();
        let names = load_core_names(&dir.path().join("not-created-yet")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn collects_files_and_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("Seven Samurai (1954)")).unwrap();
        std::fs::write(dir.path().join("Ikiru (1952).mkv"), b"x").unwrap();

        let names = load_core_names(dir.path()).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("Seven Samurai (1954)"));
        assert!(names.contains("Ikiru (1952).mkv"));
    }

    #[test]
    fn empty_root_is_empty_set() {
        let dir = TempDir::new().unwrap();
        assert!(load_core_names(dir.path()).unwrap().is_empty());
    }
}
