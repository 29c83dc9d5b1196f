//! Discord webhook payload
//!
//! Mirrors the subset of the execute-webhook JSON body the announcement uses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::Change;
use crate::error::Result;
use crate::humanize::{UnitSystem, format_bytes, format_delta};

/// Bot name shown on the message and in the embed footer
pub const WATCHTOWER_NAME: &str = "Portal SDK Watchtower";

pub const DEFAULT_DOWNLOAD_URL: &str = "https://download.portal.battlefield.com/PortalSDK.zip";
pub const DEFAULT_THUMBNAIL_URL: &str = "https://lis.bfportal.gg/portal-animation-logo.gif";

const EMBED_TITLE: &str = "New Portal SDK Version Available!";
const EMBED_COLOR: u32 = 0x00ff00;

/// Discord refuses empty field names
const BLANK_FIELD_NAME: &str = "\u{200b}";

/// Presentation settings for announcements
#[derive(Debug, Clone)]
pub struct AnnouncementStyle {
    /// Mention such as `<@916729041002852363>` or `<@&role>`
    pub mention: Option<String>,
    pub download_url: String,
    pub thumbnail_url: String,
}

impl Default for AnnouncementStyle {
    fn default() -> Self {
        Self {
            mention: None,
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    pub thumbnail: EmbedUrl,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

impl WebhookPayload {
    /// Build the announcement for `change`, stamped with `now`
    pub fn announcement(
        change: &Change,
        style: &AnnouncementStyle,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        #[allow(clippy::cast_precision_loss)]
        let file_size = format_bytes(change.current.file_size as f64, UnitSystem::Metric, 1)?;

        let mut fields = vec![
            EmbedField::new(
                "New Version",
                format!(
                    "`{} -> {}`",
                    change.previous.version, change.current.version
                ),
                true,
            ),
            EmbedField::new("File Size", file_size, true),
            EmbedField::new(
                BLANK_FIELD_NAME,
                format!("[Download]({})", style.download_url),
                false,
            ),
        ];

        let delta = change.size_delta();
        if delta != 0 {
            let size_change = format_delta(delta, UnitSystem::Metric, 3)?;
            fields.push(EmbedField::new(
                "Size Change",
                format!("`{size_change}`"),
                true,
            ));
        }

        let embed = Embed {
            title: EMBED_TITLE.to_string(),
            description: style.mention.clone(),
            color: EMBED_COLOR,
            thumbnail: EmbedUrl {
                url: style.thumbnail_url.clone(),
            },
            fields,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            footer: EmbedFooter {
                text: WATCHTOWER_NAME.to_string(),
            },
        };

        Ok(Self {
            username: WATCHTOWER_NAME.to_string(),
            content: style.mention.clone(),
            embeds: vec![embed],
        })
    }
}
