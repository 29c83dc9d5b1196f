//! Configuration errors

use super::WatchtowerError;

/// Creates a missing setting error
pub fn missing(name: impl Into<String>) -> WatchtowerError {
    WatchtowerError::ConfigMissing { name: name.into() }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> WatchtowerError {
    WatchtowerError::ConfigInvalid {
        message: message.into(),
    }
}
