//! Link creation.
//!
//! Links are created one at a time, each attempt reporting its own outcome
//! so the orchestrator can count results instead of parsing logs. Linking
//! never displaces anything: any occupant of the target path, link or not,
//! is left alone.

use std::path::Path;

use tracing::{debug, warn};

use crate::archive::ArchiveEntry;

/// Result of one link-creation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new link now points at the archive entry.
    Created,
    /// Something already occupies the link path; left untouched.
    SkippedExisting,
    /// Creation failed; logged, and the pass continues.
    Failed,
}

/// Create a shelf link for an archive entry.
///
/// Idempotent: an occupied path (an existing link, a dangling link, or
/// foreign content of any kind) is a silent skip, so re-running a pass
/// neither fails nor duplicates. Creation failures are contained here and
/// reported as [`LinkOutcome::Failed`].
pub fn create_link(entry: &ArchiveEntry, shelf_root: &Path) -> LinkOutcome {
    let link_path = shelf_root.join(&entry.name);

    // symlink_metadata sees any occupant, dangling links included.
    if std::fs::symlink_metadata(&link_path).is_ok() {
        return LinkOutcome::SkippedExisting;
    }

    match std::os::unix::fs::symlink(&entry.path, &link_path) {
        Ok(()) => {
            debug!(link = %link_path.display(), target = %entry.path.display(), "linked");
            LinkOutcome::Created
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            // Someone occupied the path between the check and the create.
            LinkOutcome::SkippedExisting
        }
        Err(e) => {
            warn!(target = %entry.path.display(), "failed to create rotation link: {e}");
            LinkOutcome::Failed
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
