//! Version feed access
//!
//! The feed is a JSON document of the form `{"versions": [ ... ]}` where the
//! last element is the newest release.

pub mod http;

use serde::Deserialize;

use crate::domain::VersionEntry;
use crate::error::{Result, WatchtowerError, feed as feed_error};

pub use http::HttpFeed;

/// Where the Portal SDK publishes its releases
pub const DEFAULT_FEED_URL: &str = "https://download.portal.battlefield.com/versions.json";

/// Browser-like User-Agent the feed host expects, tagged with the project URL
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:143.0) \
     Gecko/20100101 Firefox/143.0 \
     PortalSDKWachtower/https://github.com/battlefield-portal-community/PortalSDKWachtower";

/// Anything that can report the latest published release
pub trait VersionSource {
    /// Fetch the newest entry from the feed
    async fn latest(&self) -> Result<VersionEntry>;
}

#[derive(Debug, Deserialize)]
struct VersionFeed {
    #[serde(default)]
    versions: Option<Vec<VersionEntry>>,
}

/// Parse a feed document and return its last entry
pub fn parse_feed(body: &str) -> Result<VersionEntry> {
    let feed: VersionFeed = serde_json::from_str(body).map_err(feed_error::parse_failed)?;
    feed.versions
        .and_then(|mut versions| versions.pop())
        .ok_or(WatchtowerError::FeedEmpty)
}
