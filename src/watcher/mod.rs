//! Release watcher
//!
//! Holds the current baseline, polls the [`VersionSource`] and, whenever the
//! version string or the advertised size moves, rewrites the lock file and
//! announces the change through the [`Notifier`].

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::lockfile::VersionLock;
use crate::domain::{Baseline, Change, VersionEntry};
use crate::error::{Result, lockfile as lockfile_error};
use crate::feed::VersionSource;
use crate::notify::Notifier;

/// Result of a single poll
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The feed still reports the baseline
    Unchanged,
    /// A new version or size was recorded
    Changed(Change),
    /// The feed could not be read; the baseline was kept
    Skipped { reason: String },
}

/// Polls a version source and announces changes
pub struct Watcher<S, N> {
    source: S,
    notifier: N,
    lock_path: PathBuf,
    announce_bootstrap: bool,
    baseline: Baseline,
}

impl<S: VersionSource, N: Notifier> Watcher<S, N> {
    pub fn new(source: S, notifier: N, lock_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            notifier,
            lock_path: lock_path.into(),
            announce_bootstrap: true,
            baseline: Baseline::unset(),
        }
    }

    /// Whether the release recorded when no baseline existed is announced
    #[must_use]
    pub fn announce_bootstrap(mut self, enabled: bool) -> Self {
        self.announce_bootstrap = enabled;
        self
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Establish the baseline from the lock file, or from the feed when the
    /// lock file is absent or unusable
    pub async fn bootstrap(&mut self) -> Result<&Baseline> {
        if let Some(baseline) = self.load_baseline() {
            self.baseline = baseline;
            info!(
                "Current Baseline: Version={}, Size={}",
                self.baseline.version, self.baseline.file_size
            );
            return Ok(&self.baseline);
        }

        warn!(
            "{} not found or invalid. Fetching latest version to initialize...",
            self.lock_path.display()
        );

        let latest = self
            .source
            .latest()
            .await
            .map_err(|e| lockfile_error::baseline_unavailable(&e))?;

        let change = Change {
            previous: Baseline::unset(),
            current: latest,
        };
        self.record(&change, self.announce_bootstrap).await;

        info!(
            "Current Baseline: Version={}, Size={}",
            self.baseline.version, self.baseline.file_size
        );
        Ok(&self.baseline)
    }

    fn load_baseline(&self) -> Option<Baseline> {
        info!("Reading configuration from {}...", self.lock_path.display());
        match VersionLock::load(&self.lock_path) {
            Ok(lock) => lock.and_then(|lock| lock.baseline()),
            Err(e) => {
                error!("Error reading lock file: {e}");
                None
            }
        }
    }

    /// Poll the feed once and react to any change
    pub async fn check(&mut self) -> CheckOutcome {
        let latest = match self.source.latest().await {
            Ok(latest) => latest,
            Err(e) => {
                error!("{e}");
                return CheckOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        match Change::detect(&self.baseline, &latest) {
            None => CheckOutcome::Unchanged,
            Some(change) => {
                self.log_mismatch(&change);
                self.record(&change, true).await;
                CheckOutcome::Changed(change)
            }
        }
    }

    fn log_mismatch(&self, change: &Change) {
        if change.version_changed() {
            info!(
                "Portal SDK version has changed. Old: {}, New: {}",
                change.previous.version, change.current.version
            );
        }
        if change.size_changed() {
            info!(
                "Portal SDK size has changed. Old: {}, New: {}",
                change.previous.file_size, change.current.file_size
            );
        }
    }

    /// Persist the new entry, announce it, and move the baseline forward
    ///
    /// The announcement is skipped when the lock file cannot be written; the
    /// baseline advances regardless.
    async fn record(&mut self, change: &Change, announce: bool) {
        self.baseline = change.current.baseline();

        if let Err(e) = self.persist(&change.current) {
            error!("Failed to update {}: {e}", self.lock_path.display());
            return;
        }
        info!("Updated {} with new version info.", self.lock_path.display());

        if announce {
            if let Err(e) = self.notifier.announce(change).await {
                error!("Failed to announce {}: {e}", change.current.version);
            }
        }
    }

    fn persist(&self, entry: &VersionEntry) -> Result<()> {
        VersionLock::new(entry.clone()).save(&self.lock_path)
    }

    /// Bootstrap, then poll every `interval` until `shutdown` resolves
    ///
    /// A poll in progress always finishes before shutdown is honoured.
    pub async fn run<F>(&mut self, interval: Duration, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        self.bootstrap().await?;

        tokio::pin!(shutdown);
        loop {
            self.check().await;

            tokio::select! {
                () = &mut shutdown => {
                    info!("Exiting...");
                    return Ok(());
                }
                () = tokio::time::sleep(interval) => {}
            }
        }
    }
}
