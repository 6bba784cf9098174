//! Epoch-second helpers.
//!
//! All timestamps in the engine are whole epoch seconds: coarse enough to be
//! portable across filesystems, fine enough for day-granularity aging.

use std::time::{SystemTime, UNIX_EPOCH};

/// Convert a [`SystemTime`] to epoch seconds. Times before the epoch clamp
/// to zero, which classifies such entries as maximally old.
pub(crate) fn epoch_secs(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

/// Current time in epoch seconds.
pub(crate) fn now_secs() -> u64 {
    epoch_secs(SystemTime::now())
}
