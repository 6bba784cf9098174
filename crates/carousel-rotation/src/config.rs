//! Per-run configuration.
//!
//! The engine takes an explicit [`RotationConfig`] value rather than reading
//! global constants, so tests run against temporary roots with small
//! thresholds and the binary builds one from its settings file.

use std::collections::HashSet;
use std::path::PathBuf;

use carousel_settings::CarouselSettings;

/// Everything one rotation pass needs to know.
#[derive(Clone, Debug)]
pub struct RotationConfig {
    /// The full archive. Read-only; its direct children are the candidates.
    pub archive_root: PathBuf,
    /// The protected collection. Names found here never rotate.
    pub core_root: PathBuf,
    /// The shelf of symbolic links this engine owns.
    pub shelf_root: PathBuf,
    /// Where the run-state checkpoint record lives.
    pub state_path: PathBuf,
    /// Maximum number of links on the shelf after a pass.
    pub max_items: usize,
    /// Links older than this many days are evicted.
    pub link_max_age_days: u64,
    /// Archive child names skipped during scans.
    pub ignore_names: HashSet<String>,
}

impl RotationConfig {
    /// Build a run configuration from loaded settings.
    pub fn from_settings(settings: &CarouselSettings) -> Self {
        Self {
            archive_root: PathBuf::from(&settings.archive.root),
            core_root: PathBuf::from(&settings.core.root),
            shelf_root: PathBuf::from(&settings.shelf.root),
            state_path: PathBuf::from(&settings.state.path),
            max_items: settings.shelf.max_items,
            link_max_age_days: settings.shelf.link_max_age_days,
            ignore_names: settings.archive.ignore_names.iter().cloned().collect(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
