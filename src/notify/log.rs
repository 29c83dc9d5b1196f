//! Dry-run notifier

use chrono::Utc;
use tracing::info;

use crate::config::lockfile::serialization::to_json_indented;
use crate::domain::Change;
use crate::error::Result;
use crate::notify::Notifier;
use crate::notify::embed::{AnnouncementStyle, WebhookPayload};

/// Logs the webhook payload instead of sending it
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    style: AnnouncementStyle,
}

impl LogNotifier {
    pub fn new(style: AnnouncementStyle) -> Self {
        Self { style }
    }
}

impl Notifier for LogNotifier {
    async fn announce(&self, change: &Change) -> Result<()> {
        let payload = WebhookPayload::announcement(change, &self.style, Utc::now())?;
        info!(
            "Dry run, webhook not sent:\n{}",
            to_json_indented(&payload)?
        );
        Ok(())
    }
}
