//! Error types and handling for the watchtower
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`feed`]: Version feed errors
//! - [`lockfile`]: Baseline lock file errors
//! - [`webhook`]: Discord webhook errors
//! - [`fs`]: File system errors

pub mod config;
pub mod feed;
pub mod fs;
pub mod lockfile;
pub mod webhook;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for watchtower operations
#[derive(Error, Diagnostic, Debug)]
pub enum WatchtowerError {
    // Configuration errors
    #[error("Missing required setting: {name}")]
    #[diagnostic(
        code(watchtower::config::missing),
        help("Set the environment variable or pass the matching command line flag")
    )]
    ConfigMissing { name: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(watchtower::config::invalid))]
    ConfigInvalid { message: String },

    // Feed errors
    #[error("Failed to request {url}: {reason}")]
    #[diagnostic(
        code(watchtower::feed::request_failed),
        help("Check network connectivity and the feed URL")
    )]
    FeedRequest { url: String, reason: String },

    #[error("Failed to fetch data. Status code: {status}")]
    #[diagnostic(code(watchtower::feed::status))]
    FeedStatus { status: u16 },

    #[error("Failed to parse version feed: {reason}")]
    #[diagnostic(code(watchtower::feed::parse_failed))]
    FeedParse { reason: String },

    #[error("'versions' list is empty or missing in feed response")]
    #[diagnostic(code(watchtower::feed::empty))]
    FeedEmpty,

    // Lock file errors
    #[error("Failed to parse lock file: {path}: {reason}")]
    #[diagnostic(
        code(watchtower::lockfile::parse_failed),
        help("Delete the lock file to re-initialize the baseline from the feed")
    )]
    LockfileParse { path: String, reason: String },

    #[error("Failed to encode lock file: {reason}")]
    #[diagnostic(code(watchtower::lockfile::encode_failed))]
    LockfileEncode { reason: String },

    #[error("Failed to fetch latest version to create baseline: {reason}")]
    #[diagnostic(code(watchtower::lockfile::baseline_unavailable))]
    BaselineUnavailable { reason: String },

    // Webhook errors
    #[error("Failed to deliver webhook: {reason}")]
    #[diagnostic(
        code(watchtower::webhook::request_failed),
        help("Check that DISCORD_WEBHOOK_URL points at a valid Discord webhook")
    )]
    WebhookRequest { reason: String },

    #[error("Webhook rejected with status {status}: {body}")]
    #[diagnostic(code(watchtower::webhook::status))]
    WebhookStatus { status: u16, body: String },

    // Formatting errors
    #[error("Precision must be in range 0-3, got {precision}")]
    #[diagnostic(code(watchtower::humanize::invalid_precision))]
    InvalidPrecision { precision: usize },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(watchtower::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(watchtower::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(watchtower::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for WatchtowerError {
    fn from(err: std::io::Error) -> Self {
        WatchtowerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WatchtowerError {
    fn from(err: serde_json::Error) -> Self {
        WatchtowerError::FeedParse {
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for WatchtowerError {
    fn from(err: reqwest::Error) -> Self {
        WatchtowerError::FeedRequest {
            url: err
                .url()
                .map_or_else(|| "unknown".to_string(), ToString::to_string),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WatchtowerError>;
