//! HTTP implementation of the version feed

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::domain::VersionEntry;
use crate::error::{Result, feed as feed_error};
use crate::feed::{VersionSource, parse_feed};

/// Version feed fetched over HTTPS
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| feed_error::request_failed("client", e))?;

        Ok(Self {
            client,
            url: url.into(),
            user_agent: user_agent.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl VersionSource for HttpFeed {
    async fn latest(&self) -> Result<VersionEntry> {
        debug!(url = %self.url, "fetching version feed");

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| feed_error::request_failed(&self.url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(feed_error::status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| feed_error::request_failed(&self.url, e))?;

        parse_feed(&body)
    }
}
