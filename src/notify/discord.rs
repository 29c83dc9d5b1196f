//! Discord execute-webhook delivery

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::Change;
use crate::error::{Result, webhook as webhook_error};
use crate::notify::Notifier;
use crate::notify::embed::{AnnouncementStyle, WebhookPayload};

/// Posts announcements to a Discord webhook URL
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    client: reqwest::Client,
    url: String,
    style: AnnouncementStyle,
}

impl DiscordWebhook {
    pub fn new(url: impl Into<String>, style: AnnouncementStyle, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(webhook_error::request_failed)?;

        Ok(Self {
            client,
            url: url.into(),
            style,
        })
    }
}

impl Notifier for DiscordWebhook {
    async fn announce(&self, change: &Change) -> Result<()> {
        let payload = WebhookPayload::announcement(change, &self.style, Utc::now())?;
        debug!(version = %change.current.version, "posting Discord webhook");

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(webhook_error::request_failed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(webhook_error::rejected(status.as_u16(), body));
        }

        info!(
            version = %change.current.version,
            "Announced new version on Discord"
        );
        Ok(())
    }
}
