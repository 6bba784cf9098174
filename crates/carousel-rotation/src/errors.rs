//! Rotation error types.
//!
//! Only root-level failures surface here: an archive, core, or shelf root
//! that cannot be listed, or a run-state record that cannot be written.
//! Everything per-item (a vanished entry, a link that fails to create or
//! remove) is absorbed and logged at the smallest possible scope, because
//! partial progress self-corrects on the next pass.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a rotation pass.
#[derive(Debug, Error)]
pub enum RotationError {
    /// The archive root could not be listed. Nothing meaningful can happen
    /// without it.
    #[error("cannot list archive root {path}: {source}")]
    ArchiveRoot {
        /// The configured archive root.
        path: PathBuf,
        /// The underlying listing failure.
        #[source]
        source: std::io::Error,
    },

    /// The core root exists but could not be listed. A missing core root is
    /// not an error (it means an empty protected set).
    #[error("cannot list core root {path}: {source}")]
    CoreRoot {
        /// The configured core root.
        path: PathBuf,
        /// The underlying listing failure.
        #[source]
        source: std::io::Error,
    },

    /// The shelf root could not be created or listed.
    #[error("cannot access shelf root {path}: {source}")]
    ShelfRoot {
        /// The configured shelf root.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The run-state record could not be written at the end of the pass.
    #[error("cannot persist run state to {path}: {source}")]
    StateWrite {
        /// The configured state file path.
        path: PathBuf,
        /// The underlying write failure.
        #[source]
        source: std::io::Error,
    },

    /// The run-state record could not be encoded as JSON.
    #[error("cannot encode run state: {0}")]
    StateEncode(#[from] serde_json::Error),
}

/// Result type for rotation operations.
pub type Result<T> = std::result::Result<T, RotationError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn io_missing() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory")
    }

    #[test]
    fn archive_root_error_names_path() {
        let err = RotationError::ArchiveRoot {
            path: PathBuf::from("/mnt/movies"),
            source: io_missing(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/mnt/movies"));
        assert!(msg.contains("archive root"));
    }

    #[test]
    fn state_write_error_names_path() {
        let err = RotationError::StateWrite {
            path: PathBuf::from("/mnt/movies/.logs/rotation_state.json"),
            source: io_missing(),
        };
        assert!(err.to_string().contains("rotation_state.json"));
    }

    #[test]
    fn encode_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: RotationError = json_err.into();
        assert!(matches!(err, RotationError::StateEncode(_)));
    }
}
