//! Watch command implementation
//!
//! Runs the polling loop until the process receives Ctrl-C or SIGTERM.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::feed::HttpFeed;
use crate::notify::Announcer;
use crate::watcher::Watcher;

/// Run watch command
pub async fn run(settings: Settings) -> Result<()> {
    let source = HttpFeed::new(&settings.feed_url, &settings.user_agent, settings.timeout)?;
    let announcer = Announcer::from_settings(&settings)?;

    info!(
        feed = %source.url(),
        interval_secs = settings.interval.as_secs(),
        dry_run = settings.dry_run,
        "Starting Portal SDK Watchtower"
    );

    let mut watcher = Watcher::new(source, announcer, &settings.lock_path)
        .announce_bootstrap(settings.announce_bootstrap);

    watcher.run(settings.interval, shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on unix (what `docker stop` sends)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
