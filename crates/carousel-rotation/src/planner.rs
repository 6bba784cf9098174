//! Refill planning.
//!
//! Pure selection logic over snapshots gathered by the scanner and the
//! shelf inspector. Nothing here touches the filesystem, which is what
//! makes the ordering rules directly testable.
//!
//! Selection rules:
//! - Core names never rotate.
//! - Entries modified since the last pass form a strict priority tier:
//!   no backlog item is picked while an eligible new item remains and
//!   budget is available, so fresh arrivals always surface first.
//! - New entries are taken newest first, name ascending on equal
//!   timestamps, so same-second imports land in a reproducible order.
//! - Backlog entries are taken in case-insensitive name order. Alphabetical
//!   rather than recency order makes repeated passes converge instead of
//!   thrashing.
//! - Names already on the shelf are passed over without consuming budget.

use std::collections::HashSet;

use crate::archive::ArchiveEntry;

/// The ordered selection for one pass, with the partition counts that
/// produced it.
#[derive(Clone, Debug, Default)]
pub struct RotationPlan {
    /// Entries to link, in priority order. At most `budget` long.
    pub selected: Vec<ArchiveEntry>,
    /// Eligible entries modified since the last pass.
    pub new_candidates: usize,
    /// Eligible entries that predate the last pass.
    pub old_candidates: usize,
}

/// Compute the refill plan.
///
/// `budget` is how many links may be added this pass; zero selects nothing.
/// `current_links` are the post-eviction shelf names.
pub fn plan_rotation(
    entries: Vec<ArchiveEntry>,
    core_names: &HashSet<String>,
    current_links: &HashSet<String>,
    last_run: u64,
    budget: usize,
) -> RotationPlan {
    let mut fresh = Vec::new();
    let mut backlog = Vec::new();
    for entry in entries {
        if core_names.contains(&entry.name) {
            continue;
        }
        if entry.mtime > last_run {
            fresh.push(entry);
        } else {
            backlog.push(entry);
        }
    }

    fresh.sort_by(|a, b| b.mtime.cmp(&a.mtime).then_with(|| a.name.cmp(&b.name)));
    backlog.sort_by_key(|entry| entry.name.to_lowercase());

    let new_candidates = fresh.len();
    let old_candidates = backlog.len();

    let mut selected = Vec::new();
    for entry in fresh.into_iter().chain(backlog) {
        if selected.len() >= budget {
            break;
        }
        if current_links.contains(&entry.name) {
            continue;
        }
        selected.push(entry);
    }

    RotationPlan {
        selected,
        new_candidates,
        old_candidates,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
