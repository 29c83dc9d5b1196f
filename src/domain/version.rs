//! Version domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::serialization::deserialize_file_size;

/// Version string used as the previous value when no baseline exists yet
pub const UNSET_VERSION: &str = "INVALID";

/// One release published in the version feed
///
/// Keys other than `version` and `fileSize` are carried along untouched so the
/// lock file mirrors the feed entry it was written from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,

    #[serde(rename = "fileSize", deserialize_with = "deserialize_file_size")]
    pub file_size: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VersionEntry {
    #[cfg(test)]
    pub fn new(version: impl Into<String>, file_size: u64) -> Self {
        Self {
            version: version.into(),
            file_size,
            extra: Map::new(),
        }
    }

    pub fn baseline(&self) -> Baseline {
        Baseline {
            version: self.version.clone(),
            file_size: self.file_size,
        }
    }
}

/// The last announced release the watcher compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub version: String,
    pub file_size: u64,
}

impl Baseline {
    /// Placeholder used before the first release has been recorded
    pub fn unset() -> Self {
        Self {
            version: UNSET_VERSION.to_string(),
            file_size: 0,
        }
    }

    /// A baseline needs a version and a non-zero size to be trusted
    pub fn is_valid(&self) -> bool {
        !self.version.is_empty() && self.version != UNSET_VERSION && self.file_size > 0
    }
}

/// Difference between the baseline and the latest feed entry
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub previous: Baseline,
    pub current: VersionEntry,
}

impl Change {
    /// Compare `current` against `previous`; `None` when nothing moved
    pub fn detect(previous: &Baseline, current: &VersionEntry) -> Option<Self> {
        let change = Self {
            previous: previous.clone(),
            current: current.clone(),
        };
        (change.version_changed() || change.size_changed()).then_some(change)
    }

    pub fn version_changed(&self) -> bool {
        self.previous.version != self.current.version
    }

    pub fn size_changed(&self) -> bool {
        self.previous.file_size != self.current.file_size
    }

    /// Signed size difference in bytes, positive when the download grew
    pub fn size_delta(&self) -> i128 {
        i128::from(self.current.file_size) - i128::from(self.previous.file_size)
    }
}
