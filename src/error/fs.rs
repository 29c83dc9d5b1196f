//! File system errors

use std::path::Path;

use super::WatchtowerError;

/// Creates a file read error
pub fn read_failed(path: &Path, reason: impl ToString) -> WatchtowerError {
    WatchtowerError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl ToString) -> WatchtowerError {
    WatchtowerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
