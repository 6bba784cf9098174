//! # carousel-settings
//!
//! Configuration for the carousel rotation tool.
//!
//! Settings are resolved from three layers (in priority order):
//! 1. **Compiled defaults**, [`CarouselSettings::default()`]
//! 2. **Settings file**, `~/.carousel/settings.json` (partial files allowed;
//!    missing fields keep their defaults)
//! 3. **Environment variables**, `CAROUSEL_*` overrides (highest priority)
//!
//! There is no global settings singleton: callers load a [`CarouselSettings`]
//! value once at startup and pass it (or a config derived from it) into each
//! component explicitly, which keeps tests free to use isolated temporary
//! roots and small thresholds.
//!
//! # Usage
//!
//! ```no_run
//! use carousel_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! println!("shelf capacity: {}", settings.shelf.max_items);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
