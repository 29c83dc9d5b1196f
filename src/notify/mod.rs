//! Release announcements
//!
//! - [`embed`]: Discord message payload built from a [`Change`]
//! - [`discord`]: delivery through a Discord execute-webhook URL
//! - [`log`]: dry-run notifier that only logs the payload

pub mod discord;
pub mod embed;
pub mod log;

use crate::config::Settings;
use crate::domain::Change;
use crate::error::Result;

pub use discord::DiscordWebhook;
pub use embed::AnnouncementStyle;
pub use log::LogNotifier;

/// Anything that can announce a detected release change
pub trait Notifier {
    async fn announce(&self, change: &Change) -> Result<()>;
}

/// Notifier chosen at start-up from the settings
#[derive(Debug, Clone)]
pub enum Announcer {
    Discord(DiscordWebhook),
    DryRun(LogNotifier),
}

impl Announcer {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match settings.webhook_url.as_deref() {
            Some(url) if !settings.dry_run => Ok(Self::Discord(DiscordWebhook::new(
                url,
                settings.style.clone(),
                settings.timeout,
            )?)),
            _ => Ok(Self::DryRun(LogNotifier::new(settings.style.clone()))),
        }
    }
}

impl Notifier for Announcer {
    async fn announce(&self, change: &Change) -> Result<()> {
        match self {
            Self::Discord(webhook) => webhook.announce(change).await,
            Self::DryRun(log) => log.announce(change).await,
        }
    }
}
