//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]` so partial
//! JSON files are valid: any missing field takes its production default.
//! The defaults describe the original deployment (a NAS media library under
//! `/mnt`); real installs are expected to override the roots.

use serde::{Deserialize, Serialize};

/// Root settings for the carousel tool.
///
/// Loaded from `~/.carousel/settings.json`, with `CAROUSEL_*` environment
/// variables applied on top. Example file overriding a single value:
///
/// ```json
/// { "shelf": { "maxItems": 250 } }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselSettings {
    /// Settings schema version.
    pub version: String,
    /// Archive scanning settings.
    pub archive: ArchiveSettings,
    /// Protected core collection settings.
    pub core: CoreSettings,
    /// Rotation shelf settings.
    pub shelf: ShelfSettings,
    /// Run-state persistence settings.
    pub state: StateSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            archive: ArchiveSettings::default(),
            core: CoreSettings::default(),
            shelf: ShelfSettings::default(),
            state: StateSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Where the full archive lives and which names to skip while scanning it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchiveSettings {
    /// Archive root directory. Direct children are the rotation candidates.
    pub root: String,
    /// Names ignored during scans: noise files left behind by macOS,
    /// Synology, Syncthing, and similar tools.
    pub ignore_names: Vec<String>,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            root: "/mnt/movies".to_string(),
            ignore_names: vec![
                ".DS_Store".to_string(),
                "@eaDir".to_string(),
                ".stfolder".to_string(),
                ".stversions".to_string(),
            ],
        }
    }
}

/// The permanent collection whose names never enter rotation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreSettings {
    /// Core root directory. Every direct child's name is protected.
    pub root: String,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            root: "/mnt/core_movies".to_string(),
        }
    }
}

/// The rotating shelf of symbolic links.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShelfSettings {
    /// Shelf root directory, holding only symbolic links.
    pub root: String,
    /// Maximum number of links kept on the shelf. Around a thousand items
    /// is large enough for variety but small enough to feel curated.
    pub max_items: usize,
    /// Links older than this many days are removed, giving the shelf a
    /// predictable rhythm.
    pub link_max_age_days: u64,
}

impl Default for ShelfSettings {
    fn default() -> Self {
        Self {
            root: "/mnt/rotation_movies".to_string(),
            max_items: 1000,
            link_max_age_days: 30,
        }
    }
}

/// Where the run-state checkpoint record is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSettings {
    /// Run-state file path. The parent directory is created on demand.
    pub path: String,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            path: "/mnt/movies/.logs/rotation_state.json".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum log level when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
