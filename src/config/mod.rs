//! Configuration handling for the watchtower
//!
//! This module contains:
//! - `version.lock` - the persisted release baseline
//! - [`Settings`] - runtime settings resolved from flags and environment

pub mod lockfile;
pub mod settings;

// Re-export commonly used types
pub use lockfile::VersionLock;
pub use settings::Settings;
