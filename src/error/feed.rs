//! Version feed errors

use super::WatchtowerError;

/// Creates a feed request error
pub fn request_failed(url: impl Into<String>, reason: impl ToString) -> WatchtowerError {
    WatchtowerError::FeedRequest {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an unexpected status error
pub fn status(status: u16) -> WatchtowerError {
    WatchtowerError::FeedStatus { status }
}

/// Creates a feed parse error
pub fn parse_failed(reason: impl ToString) -> WatchtowerError {
    WatchtowerError::FeedParse {
        reason: reason.to_string(),
    }
}
