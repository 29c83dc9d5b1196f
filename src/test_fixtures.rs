//! Test fixtures and in-memory stand-ins for the network edges.
//!
//! The watcher is generic over [`VersionSource`] and [`Notifier`]; these fakes
//! let tests script feed responses and inspect announcements without HTTP.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{ScriptedSource, RecordingNotifier, lock_path};
//!
//! let (temp, path) = lock_path();
//! let source = ScriptedSource::new([Some(("1.0.0", 100)), None]);
//! let notifier = RecordingNotifier::default();
//! ```

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use crate::domain::{Change, VersionEntry};
use crate::error::{Result, WatchtowerError, webhook as webhook_error};
use crate::feed::VersionSource;
use crate::notify::Notifier;

/// Create a temp directory and the lock file path inside it.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn lock_path() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("version.lock");
    (temp, path)
}

/// Feed that replays a fixed script of responses
///
/// `None` entries fail with a 503. Once the script is exhausted the last
/// response repeats.
pub struct ScriptedSource {
    responses: Vec<Option<VersionEntry>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new<'a>(responses: impl IntoIterator<Item = Option<(&'a str, u64)>>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|r| r.map(|(version, size)| VersionEntry::new(version, size)))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VersionSource for ScriptedSource {
    async fn latest(&self) -> Result<VersionEntry> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.responses.len().saturating_sub(1));
        self.responses
            .get(index)
            .cloned()
            .flatten()
            .ok_or(WatchtowerError::FeedStatus { status: 503 })
    }
}

impl VersionSource for &ScriptedSource {
    async fn latest(&self) -> Result<VersionEntry> {
        (**self).latest().await
    }
}

/// Notifier that remembers every announcement
#[derive(Default)]
pub struct RecordingNotifier {
    announced: Mutex<Vec<Change>>,
    fail: bool,
}

impl RecordingNotifier {
    /// A notifier whose deliveries always fail (after being recorded)
    pub fn failing() -> Self {
        Self {
            announced: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn announced(&self) -> Vec<Change> {
        self.announced
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    async fn announce(&self, change: &Change) -> Result<()> {
        if let Ok(mut changes) = self.announced.lock() {
            changes.push(change.clone());
        }
        if self.fail {
            return Err(webhook_error::rejected(500, "unavailable"));
        }
        Ok(())
    }
}

impl Notifier for &RecordingNotifier {
    async fn announce(&self, change: &Change) -> Result<()> {
        (**self).announce(change).await
    }
}
