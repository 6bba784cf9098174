//! The rotation pass.
//!
//! Sequences the components once per invocation and commits the run-state
//! checkpoint only after the whole pass completes. An interruption anywhere
//! leaves the previous checkpoint in place, so the next pass re-derives
//! "new since last run" from the older timestamp: over-inclusive, never
//! under-inclusive, and every individual operation is idempotent.

use std::collections::HashSet;

use tracing::info;

use crate::config::RotationConfig;
use crate::errors::{Result, RotationError};
use crate::linker::LinkOutcome;
use crate::state::RunState;
use crate::{archive, clock, core_set, linker, planner, shelf, state};

/// Counts from one completed rotation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Protected names loaded from the core root.
    pub core_names: usize,
    /// Stale links removed before refill.
    pub evicted: usize,
    /// Eligible archive entries modified since the last pass.
    pub new_candidates: usize,
    /// Eligible archive entries that predate the last pass.
    pub old_candidates: usize,
    /// Links created this pass.
    pub created: usize,
    /// Planned links skipped because the path was already occupied.
    pub skipped_existing: usize,
    /// Planned links that failed to create.
    pub failed: usize,
    /// Shelf link count after the pass.
    pub shelf_size: usize,
}

/// Run one full rotation pass.
///
/// Fatal only when a root itself is unusable; per-item failures are logged
/// inside the components and show up in the report counts. Completing the
/// pass persists `last_run`, even if some individual links failed.
pub fn run_rotation(config: &RotationConfig) -> Result<RunReport> {
    // Classification timestamp, captured before any link work so an entry
    // modified mid-run still lands in exactly one of new/old next time.
    let now = clock::now_secs();

    std::fs::create_dir_all(&config.shelf_root).map_err(|source| RotationError::ShelfRoot {
        path: config.shelf_root.clone(),
        source,
    })?;

    let run_state = state::load_state(&config.state_path);

    let core_names = core_set::load_core_names(&config.core_root)?;
    info!(count = core_names.len(), "loaded core names");

    let links = shelf::list_links(&config.shelf_root)?;
    let evicted = shelf::evict_stale(&links, now, config.link_max_age_days);
    if evicted > 0 {
        info!(count = evicted, "evicted stale rotation links");
    }

    // Re-list: the post-eviction count is what feeds the refill budget.
    let links = shelf::list_links(&config.shelf_root)?;
    let current: HashSet<String> = links.iter().map(|l| l.name.clone()).collect();

    let entries = archive::scan_archive(&config.archive_root, &config.ignore_names)?;
    let budget = config.max_items.saturating_sub(links.len());
    let plan = planner::plan_rotation(entries, &core_names, &current, run_state.last_run, budget);
    info!(
        new = plan.new_candidates,
        old = plan.old_candidates,
        budget,
        selected = plan.selected.len(),
        "planned rotation refill"
    );

    let mut created = 0;
    let mut skipped_existing = 0;
    let mut failed = 0;
    for entry in &plan.selected {
        match linker::create_link(entry, &config.shelf_root) {
            LinkOutcome::Created => created += 1,
            LinkOutcome::SkippedExisting => skipped_existing += 1,
            LinkOutcome::Failed => failed += 1,
        }
    }

    let shelf_size = shelf::list_links(&config.shelf_root)?.len();

    // The checkpoint never moves backwards, even under clock skew.
    let next_state = RunState {
        last_run: now.max(run_state.last_run),
    };
    state::save_state(&config.state_path, &next_state)?;

    info!(created, shelf_size, "rotation pass complete");
    Ok(RunReport {
        core_names: core_names.len(),
        evicted,
        new_candidates: plan.new_candidates,
        old_candidates: plan.old_candidates,
        created,
        skipped_existing,
        failed,
        shelf_size,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
