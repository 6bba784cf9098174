//! Shelf inspection and eviction.
//!
//! The shelf contains only what this engine created: symbolic links into
//! the archive. Anything else found there (a stray file, a directory) is
//! foreign content, invisible to listing, eviction, and the capacity count
//! alike. Links age out on a hard cutoff measured against the link's own
//! timestamp, and links whose target no longer resolves go immediately.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::clock;
use crate::errors::{Result, RotationError};

/// A symbolic link currently on the shelf.
#[derive(Clone, Debug)]
pub struct ShelfLink {
    /// Link name, matching the archive entry it points at.
    pub name: String,
    /// Full path of the link inside the shelf root.
    pub path: PathBuf,
    /// The link's own last-modified time in epoch seconds. This is when the
    /// link appeared on the shelf, not how old its target is. On platforms
    /// where reading a symlink refreshes its timestamps, shelf residency
    /// stretches accordingly.
    pub mtime: u64,
}

/// List the shelf's symbolic links.
///
/// Non-link entries are skipped entirely. Links that vanish between listing
/// and stat are skipped too; eviction treats such races as already handled.
pub fn list_links(root: &Path) -> Result<Vec<ShelfLink>> {
    let entries = std::fs::read_dir(root).map_err(|source| RotationError::ShelfRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut links = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_symlink() {
            continue;
        }
        // DirEntry::metadata does not follow the link, so this is the
        // link's own timestamp.
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        links.push(ShelfLink {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            mtime: metadata.modified().map_or(0, clock::epoch_secs),
        });
    }
    Ok(links)
}

/// Remove stale links and return how many went.
///
/// A link is stale when its target no longer resolves (dangling, removed
/// whatever its age) or when it has sat on the shelf longer than
/// `max_age_days`. The cutoff is hard: no grace period and no extension
/// for recently-browsed links. A link that is already gone counts as
/// removed; a removal that fails for any other reason is logged and left
/// for the next pass.
pub fn evict_stale(links: &[ShelfLink], now: u64, max_age_days: u64) -> usize {
    let max_age_secs = max_age_days * 24 * 60 * 60;
    let mut removed = 0;

    for link in links {
        let dangling = matches!(link.path.try_exists(), Ok(false));
        let expired = now.saturating_sub(link.mtime) > max_age_secs;
        if !dangling && !expired {
            continue;
        }

        match std::fs::remove_file(&link.path) {
            Ok(()) => {
                debug!(link = %link.path.display(), dangling, "removed stale rotation link");
                removed += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Raced out from under us; it is gone either way.
                removed += 1;
            }
            Err(e) => {
                warn!(link = %link.path.display(), "failed to remove stale link: {e}");
            }
        }
    }
    removed
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
