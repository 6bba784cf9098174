//! # carousel-cli
//!
//! The `carousel` binary. Each invocation performs one rotation pass:
//! evict stale shelf links, then refill from the archive, newest content
//! first. Scheduling is external (cron or a systemd timer); the process
//! exits successfully after any completed pass, even one with individual
//! link failures, since those self-correct next time.

#![deny(unsafe_code)]

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel_rotation::{RotationConfig, run_rotation};
use carousel_settings::{CarouselSettings, load_settings_from_path, settings_path};
use clap::Parser;

/// Maintain a rotating shelf of links into a media archive.
#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Maintain a rotating shelf of links into a media archive")]
struct Cli {
    /// Path to the settings file (default: ~/.carousel/settings.json).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Archive root to scan (overrides settings).
    #[arg(long)]
    archive_root: Option<String>,

    /// Core root whose names never rotate (overrides settings).
    #[arg(long)]
    core_root: Option<String>,

    /// Shelf root holding the rotation links (overrides settings).
    #[arg(long)]
    shelf_root: Option<String>,

    /// Run-state file location (overrides settings).
    #[arg(long)]
    state_path: Option<String>,

    /// Maximum number of links on the shelf (overrides settings).
    #[arg(long)]
    max_items: Option<usize>,

    /// Link age limit in days (overrides settings).
    #[arg(long)]
    max_age_days: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    fn apply_overrides(&self, settings: &mut CarouselSettings) {
        if let Some(v) = &self.archive_root {
            settings.archive.root.clone_from(v);
        }
        if let Some(v) = &self.core_root {
            settings.core.root.clone_from(v);
        }
        if let Some(v) = &self.shelf_root {
            settings.shelf.root.clone_from(v);
        }
        if let Some(v) = &self.state_path {
            settings.state.path.clone_from(v);
        }
        if let Some(v) = self.max_items {
            settings.shelf.max_items = v;
        }
        if let Some(v) = self.max_age_days {
            settings.shelf.link_max_age_days = v;
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let path = args.settings.clone().unwrap_or_else(settings_path);
    let (mut settings, load_error) = match load_settings_from_path(&path) {
        Ok(s) => (s, None),
        Err(e) => (CarouselSettings::default(), Some(e)),
    };
    args.apply_overrides(&mut settings);

    logging::init_subscriber(&settings.logging.level);
    if let Some(e) = load_error {
        tracing::warn!(path = %path.display(), "settings file unusable, using defaults: {e}");
    }

    let config = RotationConfig::from_settings(&settings);
    tracing::info!(
        archive = %config.archive_root.display(),
        shelf = %config.shelf_root.display(),
        max_items = config.max_items,
        "rotation pass starting"
    );

    let report = run_rotation(&config).with_context(|| {
        format!(
            "rotation pass failed (archive {}, shelf {})",
            config.archive_root.display(),
            config.shelf_root.display()
        )
    })?;

    tracing::info!(
        core_names = report.core_names,
        evicted = report.evicted,
        new = report.new_candidates,
        old = report.old_candidates,
        created = report.created,
        skipped = report.skipped_existing,
        failed = report.failed,
        shelf_size = report.shelf_size,
        "rotation pass complete"
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_defaults_to_no_overrides() {
        let cli = Cli::parse_from(["carousel"]);
        assert!(cli.settings.is_none());
        assert!(cli.archive_root.is_none());
        assert!(cli.max_items.is_none());
        assert!(cli.max_age_days.is_none());
    }

    #[test]
    fn cli_parses_settings_path() {
        let cli = Cli::parse_from(["carousel", "--settings", "/etc/carousel.json"]);
        assert_eq!(cli.settings, Some(PathBuf::from("/etc/carousel.json")));
    }

    #[test]
    fn cli_parses_numeric_overrides() {
        let cli = Cli::parse_from(["carousel", "--max-items", "250", "--max-age-days", "14"]);
        assert_eq!(cli.max_items, Some(250));
        assert_eq!(cli.max_age_days, Some(14));
    }

    #[test]
    fn overrides_apply_on_top_of_settings() {
        let cli = Cli::parse_from([
            "carousel",
            "--archive-root",
            "/data/films",
            "--max-items",
            "9",
        ]);
        let mut settings = CarouselSettings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.archive.root, "/data/films");
        assert_eq!(settings.shelf.max_items, 9);
        // Untouched fields keep their values.
        assert_eq!(settings.shelf.link_max_age_days, 30);
        assert_eq!(settings.core.root, "/mnt/core_movies");
    }

    #[test]
    fn no_overrides_leave_settings_alone() {
        let cli = Cli::parse_from(["carousel"]);
        let mut settings = CarouselSettings::default();
        cli.apply_overrides(&mut settings);

        let defaults = CarouselSettings::default();
        assert_eq!(settings.archive.root, defaults.archive.root);
        assert_eq!(settings.shelf.max_items, defaults.shelf.max_items);
        assert_eq!(settings.shelf.link_max_age_days, defaults.shelf.link_max_age_days);
        assert_eq!(settings.state.path, defaults.state.path);
    }

    #[test]
    fn end_to_end_pass_over_temp_roots() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("movies");
        std::fs::create_dir(&archive).unwrap();
        std::fs::create_dir(archive.join("Playtime (1967)")).unwrap();

        let cli = Cli::parse_from([
            "carousel",
            "--archive-root",
            archive.to_str().unwrap(),
            "--core-root",
            dir.path().join("core").to_str().unwrap(),
            "--shelf-root",
            dir.path().join("rotation").to_str().unwrap(),
            "--state-path",
            dir.path().join("state.json").to_str().unwrap(),
        ]);
        let mut settings = CarouselSettings::default();
        cli.apply_overrides(&mut settings);

        let config = RotationConfig::from_settings(&settings);
        let report = run_rotation(&config).unwrap();
        assert_eq!(report.created, 1);
        assert_eq!(report.shelf_size, 1);
    }
}
