//! Lock file errors

use std::path::Path;

use super::WatchtowerError;

/// Creates a lock file parse error
pub fn parse_failed(path: &Path, reason: impl ToString) -> WatchtowerError {
    WatchtowerError::LockfileParse {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a baseline unavailable error from the underlying fetch failure
pub fn baseline_unavailable(cause: &WatchtowerError) -> WatchtowerError {
    WatchtowerError::BaselineUnavailable {
        reason: cause.to_string(),
    }
}

/// Creates a lock file encoding error
pub fn encode_failed(reason: impl ToString) -> WatchtowerError {
    WatchtowerError::LockfileEncode {
        reason: reason.to_string(),
    }
}
