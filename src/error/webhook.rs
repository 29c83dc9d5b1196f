//! Discord webhook errors

use super::WatchtowerError;

/// Creates a webhook transport error
pub fn request_failed(reason: impl ToString) -> WatchtowerError {
    WatchtowerError::WebhookRequest {
        reason: reason.to_string(),
    }
}

/// Creates a webhook rejection error
pub fn rejected(status: u16, body: impl Into<String>) -> WatchtowerError {
    WatchtowerError::WebhookStatus {
        status,
        body: body.into(),
    }
}
