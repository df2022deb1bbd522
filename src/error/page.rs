//! Page loading errors

use super::PagemetaError;

/// Creates a page read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PagemetaError {
    PagemetaError::PageReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
