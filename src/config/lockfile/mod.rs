//! Lock file (version.lock) main module
//!
//! The lock file holds the last feed entry the watcher announced. It is the
//! baseline a restarted watcher resumes from.

pub mod serialization;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::fs::{read_optional, write_atomic};
use crate::config::lockfile::serialization::to_json_indented;
use crate::domain::{Baseline, VersionEntry};
use crate::error::{Result, lockfile as lockfile_error};

/// Default lock file location, relative to the working directory
pub const DEFAULT_LOCK_FILE: &str = "version.lock";

/// Persisted baseline (version.lock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLock {
    pub entry: VersionEntry,
}

impl VersionLock {
    pub fn new(entry: VersionEntry) -> Self {
        Self { entry }
    }

    /// Parse lock file contents
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| lockfile_error::parse_failed(path, e))
    }

    /// Serialize to JSON indented with four spaces
    pub fn to_json(&self) -> Result<String> {
        to_json_indented(self)
    }

    /// Load the lock file, `Ok(None)` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let Some(json) = read_optional(path)? else {
            debug!(path = %path.display(), "no lock file present");
            return Ok(None);
        };
        Self::from_json(path, &json).map(Some)
    }

    /// Write the lock file atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())
    }

    /// Baseline recorded in this lock, `None` if it cannot be trusted
    pub fn baseline(&self) -> Option<Baseline> {
        let baseline = self.entry.baseline();
        baseline.is_valid().then_some(baseline)
    }
}
