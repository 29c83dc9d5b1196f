//! Check command implementation
//!
//! Establishes the baseline and polls the feed a single time. Useful from cron
//! or to verify a deployment's configuration.

use console::Style;

use crate::config::Settings;
use crate::domain::Change;
use crate::error::Result;
use crate::feed::HttpFeed;
use crate::notify::Announcer;
use crate::watcher::{CheckOutcome, Watcher};

/// Run check command
pub async fn run(settings: Settings) -> Result<()> {
    let source = HttpFeed::new(&settings.feed_url, &settings.user_agent, settings.timeout)?;
    let announcer = Announcer::from_settings(&settings)?;

    let mut watcher = Watcher::new(source, announcer, &settings.lock_path)
        .announce_bootstrap(settings.announce_bootstrap);

    watcher.bootstrap().await?;
    let outcome = watcher.check().await;
    println!("{}", describe(&outcome));
    println!(
        "Baseline: {} ({} bytes)",
        watcher.baseline().version,
        watcher.baseline().file_size
    );

    Ok(())
}

fn describe(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Unchanged => format!("{}", Style::new().green().apply_to("Up to date")),
        CheckOutcome::Changed(change) => describe_change(change),
        CheckOutcome::Skipped { reason } => format!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Skipped:"),
            reason
        ),
    }
}

fn describe_change(change: &Change) -> String {
    format!(
        "{} {} -> {} ({} -> {} bytes)",
        Style::new().cyan().bold().apply_to("Changed:"),
        change.previous.version,
        change.current.version,
        change.previous.file_size,
        change.current.file_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Baseline, VersionEntry};

    #[test]
    fn test_describe_change() {
        console::set_colors_enabled(false);
        let change = Change {
            previous: Baseline {
                version: "1.0".to_string(),
                file_size: 10,
            },
            current: VersionEntry::new("1.1", 20),
        };
        assert_eq!(
            describe(&CheckOutcome::Changed(change)),
            "Changed: 1.0 -> 1.1 (10 -> 20 bytes)"
        );
    }

    #[test]
    fn test_describe_skipped() {
        console::set_colors_enabled(false);
        let outcome = CheckOutcome::Skipped {
            reason: "Failed to fetch data. Status code: 503".to_string(),
        };
        assert!(describe(&outcome).contains("Status code: 503"));
    }
}
