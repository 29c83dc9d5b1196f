//! Runtime settings
//!
//! Flags and environment variables are parsed by clap; this module validates
//! them into a typed [`Settings`] value.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::cli::WatchArgs;
use crate::error::{Result, config as config_error};
use crate::notify::AnnouncementStyle;

/// Validated settings for the watch and check commands
#[derive(Debug, Clone)]
pub struct Settings {
    pub lock_path: PathBuf,
    pub feed_url: String,
    pub user_agent: String,
    /// `None` only in dry-run mode
    pub webhook_url: Option<String>,
    pub style: AnnouncementStyle,
    pub interval: Duration,
    pub timeout: Duration,
    pub announce_bootstrap: bool,
    pub dry_run: bool,
}

impl Settings {
    /// Build settings from parsed command line arguments
    pub fn from_args(lock_file: &Path, args: &WatchArgs) -> Result<Self> {
        let webhook_url = match args.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Some(validate_url("webhook URL", url)?),
            _ if args.dry_run => None,
            _ => return Err(config_error::missing("DISCORD_WEBHOOK_URL")),
        };

        let feed_url = validate_url("feed URL", &args.feed_url)?;
        let download_url = validate_url("download URL", &args.download_url)?;

        if args.interval == 0 {
            return Err(config_error::invalid(
                "interval must be at least 1 second",
            ));
        }
        if args.timeout == 0 {
            return Err(config_error::invalid("timeout must be at least 1 second"));
        }

        let mention = args
            .mention
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            lock_path: lock_file.to_path_buf(),
            feed_url,
            user_agent: args.user_agent.clone(),
            webhook_url,
            style: AnnouncementStyle {
                mention,
                download_url,
                ..AnnouncementStyle::default()
            },
            interval: Duration::from_secs(args.interval),
            timeout: Duration::from_secs(args.timeout),
            announce_bootstrap: !args.no_bootstrap_announce,
            dry_run: args.dry_run,
        })
    }
}

fn validate_url(what: &str, raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| config_error::invalid(format!("invalid {what} '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(config_error::invalid(format!(
            "{what} must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(url.to_string())
}
