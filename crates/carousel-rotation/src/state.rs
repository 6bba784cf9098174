//! Persisted run state.
//!
//! A single JSON record holding the timestamp of the last completed pass.
//! It is the only thing that distinguishes "new since last run" from older
//! archive content. Losing it is harmless: the next pass treats everything
//! as new, which is over-inclusive but safe, so every read failure mode
//! (missing file, unreadable file, bad JSON, unknown schema version)
//! degrades to the default rather than failing the run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{Result, RotationError};

/// Schema version of the on-disk record.
const STATE_VERSION: u32 = 1;

/// The checkpoint separating "new" archive content from backlog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunState {
    /// Epoch seconds of the last completed pass. Zero means no pass has
    /// ever completed, so every archive entry counts as new.
    pub last_run: u64,
}

/// On-disk shape of the state record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRecord {
    version: u32,
    last_run: u64,
    last_updated: String,
}

/// Load the run state, defaulting on any unreadable or unrecognized record.
pub fn load_state(path: &Path) -> RunState {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return RunState::default(),
        Err(e) => {
            warn!(path = %path.display(), "run state unreadable, treating as first run: {e}");
            return RunState::default();
        }
    };

    match serde_json::from_str::<StateRecord>(&data) {
        Ok(record) if record.version == STATE_VERSION => RunState {
            last_run: record.last_run,
        },
        Ok(record) => {
            warn!(
                version = record.version,
                "unsupported run-state version, treating as first run"
            );
            RunState::default()
        }
        Err(e) => {
            warn!(path = %path.display(), "run state corrupt, treating as first run: {e}");
            RunState::default()
        }
    }
}

/// Persist the run state, creating the parent directory if needed and
/// overwriting any prior record.
pub fn save_state(path: &Path, state: &RunState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| RotationError::StateWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let record = StateRecord {
        version: STATE_VERSION,
        last_run: state.last_run,
        last_updated: chrono::Utc::now().to_rfc3339(),
    };
    let json = serde_json::to_string_pretty(&record)?;
    std::fs::write(path, json).map_err(|source| RotationError::StateWrite {
        path: path.to_path_buf(),
        source,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
