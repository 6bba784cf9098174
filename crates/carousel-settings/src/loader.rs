//! Settings loading and environment overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`CarouselSettings::default()`]
//! 2. If the settings file exists, deserialize it; `#[serde(default)]` on
//!    every type means a partial file only overrides the fields it names
//! 3. Apply `CAROUSEL_*` environment variable overrides (highest priority)
//!
//! Environment values parse strictly: integers must be in range, and invalid
//! values are logged and ignored so a typo in a cron environment falls back
//! to the file/default value instead of breaking the nightly pass.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::types::CarouselSettings;

/// Resolve the settings file path (`~/.carousel/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".carousel").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<CarouselSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. A file that exists but cannot be read or
/// parsed is an error; callers decide whether that is fatal (the binary
/// falls back to defaults with a warning).
pub fn load_settings_from_path(path: &Path) -> Result<CarouselSettings> {
    let mut settings = if path.exists() {
        debug!(path = %path.display(), "loading settings file");
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    } else {
        debug!(path = %path.display(), "settings file not found, using defaults");
        CarouselSettings::default()
    };
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Apply `CAROUSEL_*` environment variable overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut CarouselSettings) {
    if let Some(v) = read_env_string("CAROUSEL_ARCHIVE_ROOT") {
        settings.archive.root = v;
    }
    if let Some(v) = read_env_string("CAROUSEL_CORE_ROOT") {
        settings.core.root = v;
    }
    if let Some(v) = read_env_string("CAROUSEL_SHELF_ROOT") {
        settings.shelf.root = v;
    }
    if let Some(v) = read_env_string("CAROUSEL_STATE_PATH") {
        settings.state.path = v;
    }
    if let Some(v) = read_env_usize("CAROUSEL_MAX_ITEMS", 1, 1_000_000) {
        settings.shelf.max_items = v;
    }
    if let Some(v) = read_env_u64("CAROUSEL_LINK_MAX_AGE_DAYS", 1, 3650) {
        settings.shelf.link_max_age_days = v;
    }
    if let Some(v) = read_env_string("CAROUSEL_LOG_LEVEL") {
        settings.logging.level = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a `usize` within an inclusive range.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

/// Parse a string as a `u64` within an inclusive range.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    let n: u64 = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ── Env var readers (thin wrappers) ─────────────────────────────────────────

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_usize(name: &str, min: usize, max: usize) -> Option<usize> {
    let val = std::env::var(name).ok()?;
    let result = parse_usize_range(&val, min, max);
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid integer env var, ignoring");
    }
    result
}

fn read_env_u64(name: &str, min: u64, max: u64) -> Option<u64> {
    let val = std::env::var(name).ok()?;
    let result = parse_u64_range(&val, min, max);
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid integer env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SettingsError;

    // ── load_settings_from_path ─────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let settings =
            load_settings_from_path(Path::new("/nonexistent/carousel/settings.json")).unwrap();
        let defaults = CarouselSettings::default();
        assert_eq!(settings.shelf.max_items, defaults.shelf.max_items);
        assert_eq!(settings.archive.root, defaults.archive.root);
    }

    #[test]
    fn load_empty_json_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.shelf.max_items, 1000);
        assert_eq!(settings.shelf.link_max_age_days, 30);
    }

    #[test]
    fn load_partial_json_overrides_named_fields_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"shelf": {"maxItems": 50}, "archive": {"root": "/data/films"}}"#,
        )
        .unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.shelf.max_items, 50);
        assert_eq!(settings.archive.root, "/data/films");
        assert_eq!(settings.shelf.link_max_age_days, 30);
        assert_eq!(settings.core.root, "/mnt/core_movies");
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_settings_from_path(&path);
        assert!(matches!(result.unwrap_err(), SettingsError::Json(_)));
    }

    // ── parse_usize_range ───────────────────────────────────────────

    #[test]
    fn parse_usize_valid() {
        assert_eq!(parse_usize_range("250", 1, 1_000_000), Some(250));
        assert_eq!(parse_usize_range("1", 1, 1_000_000), Some(1));
        assert_eq!(parse_usize_range("1000000", 1, 1_000_000), Some(1_000_000));
    }

    #[test]
    fn parse_usize_out_of_range() {
        assert_eq!(parse_usize_range("0", 1, 1_000_000), None);
        assert_eq!(parse_usize_range("1000001", 1, 1_000_000), None);
    }

    #[test]
    fn parse_usize_invalid() {
        assert_eq!(parse_usize_range("many", 1, 1_000_000), None);
        assert_eq!(parse_usize_range("", 1, 1_000_000), None);
        assert_eq!(parse_usize_range("-3", 1, 1_000_000), None);
    }

    // ── parse_u64_range ─────────────────────────────────────────────

    #[test]
    fn parse_u64_valid() {
        assert_eq!(parse_u64_range("30", 1, 3650), Some(30));
        assert_eq!(parse_u64_range("3650", 1, 3650), Some(3650));
    }

    #[test]
    fn parse_u64_out_of_range() {
        assert_eq!(parse_u64_range("0", 1, 3650), None);
        assert_eq!(parse_u64_range("4000", 1, 3650), None);
    }

    #[test]
    fn parse_u64_invalid() {
        assert_eq!(parse_u64_range("monthly", 1, 3650), None);
    }
}
