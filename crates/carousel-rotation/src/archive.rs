//! Archive scanning.
//!
//! The archive root's direct children are the rotation candidates: a movie
//! is one file or one directory, never inspected deeper. Known noise names
//! (desktop-services droppings, NAS index directories, sync-tool state) are
//! filtered out. The scan is a best-effort snapshot of a live filesystem:
//! an entry that disappears between listing and stat is dropped silently.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::clock;
use crate::errors::{Result, RotationError};

/// A direct child of the archive root, eligible for rotation.
#[derive(Clone, Debug)]
pub struct ArchiveEntry {
    /// Entry name, unique within the archive root.
    pub name: String,
    /// Absolute path used as the link target.
    pub path: PathBuf,
    /// Last-modified time in epoch seconds.
    pub mtime: u64,
}

/// Scan the archive root for candidate entries.
///
/// Lists direct children only. Skips names in `ignore_names`, keeps regular
/// files and directories (following symlinks, so a linked movie directory
/// still counts), and reads each entry's modification time. A root that
/// cannot be listed aborts the pass; individual entries that vanish
/// mid-scan do not.
pub fn scan_archive(root: &Path, ignore_names: &HashSet<String>) -> Result<Vec<ArchiveEntry>> {
    let entries = std::fs::read_dir(root).map_err(|source| RotationError::ArchiveRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut items = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if ignore_names.contains(&name) {
            continue;
        }
        let path = entry.path();
        // Stat may race with external deletion; a vanished entry is not ours
        // to report.
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };
        if !metadata.is_file() && !metadata.is_dir() {
            continue;
        }
        let mtime = metadata
            .modified()
            .map_or(0, clock::epoch_secs);
        items.push(ArchiveEntry { name, path, mtime });
    }
    Ok(items)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
